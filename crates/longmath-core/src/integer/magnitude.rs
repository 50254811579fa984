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

//! Unsigned schoolbook arithmetic over decimal digit vectors.
//!
//! A magnitude is a `Vec<u8>` of decimal digit values stored least
//! significant digit first. Every function here expects normalised input
//! (non-empty, no high-order zero digits unless the value is exactly zero)
//! and produces normalised output. Signs are handled one level up in the
//! `integer` module.

use std::cmp::Ordering;

/// The base of a single stored digit.
pub(crate) const BASE: u8 = 10;

/// A little-endian sequence of decimal digit values.
pub(crate) type Digits = Vec<u8>;

/// Strips high-order zero digits, leaving a single `0` for zero.
#[inline]
pub(crate) fn normalize(digits: &mut Digits) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

#[inline]
pub(crate) fn is_zero(digits: &[u8]) -> bool {
    digits == [0]
}

#[inline]
pub(crate) fn is_one(digits: &[u8]) -> bool {
    digits == [1]
}

/// Splits an unsigned machine value into decimal digits.
pub(crate) fn from_u128(mut value: u128) -> Digits {
    let mut digits = Vec::with_capacity(39);
    loop {
        digits.push((value % BASE as u128) as u8);
        value /= BASE as u128;
        if value == 0 {
            break;
        }
    }
    digits
}

/// Folds the digits back into a machine value, or `None` on overflow.
pub(crate) fn to_u128(digits: &[u8]) -> Option<u128> {
    digits.iter().rev().try_fold(0u128, |acc, &d| {
        acc.checked_mul(BASE as u128)?.checked_add(d as u128)
    })
}

/// Compares two magnitudes.
///
/// Without leading zeros the longer vector is the larger value; vectors of
/// equal length compare digit by digit from the most significant end.
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Adds two magnitudes with carry propagation.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Digits {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u8;

    for (i, &x) in long.iter().enumerate() {
        // The shorter operand is padded with zeros.
        let y = short.get(i).copied().unwrap_or(0);
        let s = x + y + carry;
        sum.push(s % BASE);
        carry = s / BASE;
    }

    if carry > 0 {
        sum.push(carry);
    }
    sum
}

/// Subtracts `smaller` from `larger` with borrow propagation.
///
/// Requires `larger >= smaller`.
pub(crate) fn sub(larger: &[u8], smaller: &[u8]) -> Digits {
    debug_assert!(
        cmp(larger, smaller) != Ordering::Less,
        "magnitude subtraction would underflow"
    );

    let mut difference = Vec::with_capacity(larger.len());
    let mut borrow = 0u8;

    for (i, &x) in larger.iter().enumerate() {
        let y = smaller.get(i).copied().unwrap_or(0) + borrow;
        if x < y {
            difference.push(x + BASE - y);
            borrow = 1;
        } else {
            difference.push(x - y);
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0);

    normalize(&mut difference);
    difference
}

/// Multiplies a magnitude by a small factor and shifts the partial product
/// up by `shift` decimal positions.
pub(crate) fn mul_small(a: &[u8], factor: u32, shift: usize) -> Digits {
    if factor == 0 || is_zero(a) {
        return vec![0];
    }

    let mut product = vec![0u8; shift];
    product.reserve(a.len() + 2);
    let mut carry = 0u32;

    for &x in a {
        let p = x as u32 * factor + carry;
        product.push((p % BASE as u32) as u8);
        carry = p / BASE as u32;
    }
    while carry > 0 {
        product.push((carry % BASE as u32) as u8);
        carry /= BASE as u32;
    }
    product
}

/// Schoolbook long multiplication.
///
/// One partial product per digit of `a`, each shifted by the digit's
/// position and accumulated by repeated addition.
pub(crate) fn mul(a: &[u8], b: &[u8]) -> Digits {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }

    let mut accumulated = vec![0];
    for (step, &digit) in a.iter().enumerate() {
        if digit == 0 {
            continue;
        }
        let partial = mul_small(b, digit as u32, step);
        accumulated = add(&accumulated, &partial);
    }
    accumulated
}

/// Trial-quotient long division, returning `(quotient, remainder)`.
///
/// Dividend digits are consumed most significant first and appended to a
/// running partial remainder. Whenever the partial remainder reaches the
/// divisor, the quotient digit is found by counting up from two while the
/// multiple still fits and stepping back by one; otherwise the quotient
/// digit is zero.
///
/// Requires a non-zero divisor.
pub(crate) fn div_rem(dividend: &[u8], divisor: &[u8]) -> (Digits, Digits) {
    debug_assert!(!is_zero(divisor), "magnitude division by zero");

    let mut quotient = Vec::with_capacity(dividend.len());
    let mut remainder: Digits = Vec::with_capacity(divisor.len() + 1);

    for &digit in dividend.iter().rev() {
        remainder.insert(0, digit);
        normalize(&mut remainder);

        if cmp(&remainder, divisor) != Ordering::Less {
            let mut n = 2u32;
            while cmp(&mul_small(divisor, n, 0), &remainder) != Ordering::Greater {
                n += 1;
            }
            n -= 1;

            log::trace!(
                "trial quotient digit {} for a {}-digit partial remainder",
                n,
                remainder.len()
            );

            remainder = sub(&remainder, &mul_small(divisor, n, 0));
            quotient.push(n as u8);
        } else {
            quotient.push(0);
        }
    }

    // Quotient digits were produced most significant first.
    quotient.reverse();
    normalize(&mut quotient);
    normalize(&mut remainder);
    (quotient, remainder)
}
