// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use longmath_core::BigInteger;
use std::hint::black_box;

const SIZES: [usize; 4] = [16, 64, 256, 1024];

/// Builds a deterministic operand with `len` decimal digits.
fn operand(len: usize, seed: u8) -> BigInteger {
    let text: String = (0..len)
        .map(|i| {
            let d = ((i as u32 * 7 + seed as u32 * 13) % 9) as u8 + 1;
            char::from(b'0' + d)
        })
        .collect();
    text.parse().expect("generated digits form a valid integer")
}

fn bench_add_and_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_multiply");

    for len in SIZES {
        let a = operand(len, 1);
        let b = operand(len, 2);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("add", len), &len, |bench, _| {
            bench.iter(|| black_box(&a).add(black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("multiply", len), &len, |bench, _| {
            bench.iter(|| black_box(&a).multiply(black_box(&b)))
        });
    }
    group.finish();
}

fn bench_divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide");

    for len in SIZES {
        let dividend = operand(len, 3);
        let divisor = operand(len / 2, 4);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("divide", len), &len, |bench, _| {
            bench.iter(|| {
                black_box(&dividend)
                    .divide(black_box(&divisor))
                    .expect("benchmark divisor is non-zero")
            })
        });
    }
    group.finish();
}

fn bench_radix_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix_conversion");

    for len in [16usize, 64, 256] {
        let value = operand(len, 5);
        let hex = value.to_string_radix(16).expect("16 is a supported radix");
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("to_hex", len), &len, |bench, _| {
            bench.iter(|| black_box(&value).to_string_radix(16))
        });
        group.bench_with_input(BenchmarkId::new("from_hex", len), &hex, |bench, hex| {
            bench.iter(|| BigInteger::from_str_radix(black_box(hex), 16))
        });
        group.bench_with_input(BenchmarkId::new("shift_left_64", len), &len, |bench, _| {
            bench.iter(|| black_box(&value).shift_left_by(64))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add_and_multiply,
    bench_divide,
    bench_radix_conversion
);
criterion_main!(benches);
