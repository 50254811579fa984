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

//! `longmath`: evaluate one arbitrary-precision integer operation.
//!
//! ```text
//! longmath 123456789012345678901234567890 x 987654321 --output-radix 16
//! longmath ff ^ 20 --radix 16 -v
//! ```

mod operation;

use anyhow::Context;
use clap::Parser;
use longmath_core::{BigInteger, Radix};
use operation::{Operation, evaluate};

#[derive(Parser, Debug)]
#[command(name = "longmath", version, about = "Arbitrary-precision integer calculator")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Left operand.
    #[arg(allow_hyphen_values = true)]
    lhs: String,

    /// Operation: + - * / % ^ << >> (or add, sub, mul, div, mod, pow, shl, shr).
    #[arg(allow_hyphen_values = true)]
    op: Operation,

    /// Right operand.
    #[arg(allow_hyphen_values = true)]
    rhs: String,

    /// Radix the operands are written in (2-32).
    #[arg(short, long, default_value_t = Radix::DECIMAL, value_parser = parse_radix)]
    radix: Radix,

    /// Radix the result is printed in (2-32).
    #[arg(short, long, default_value_t = Radix::DECIMAL, value_parser = parse_radix)]
    output_radix: Radix,

    /// Print the calculation before the result and enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_radix(s: &str) -> Result<Radix, String> {
    let value: u32 = s.parse().map_err(|e| format!("'{}' is not a number: {}", s, e))?;
    Radix::new(value).map_err(|e| e.to_string())
}

fn parse_operand(text: &str, radix: Radix) -> anyhow::Result<BigInteger> {
    BigInteger::parse_radix(text, radix)
        .with_context(|| format!("Reading operand '{}' in radix {}", text, radix))
}

/// Runs the calculation and returns the lines to print.
fn run(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let lhs = parse_operand(&cli.lhs, cli.radix)?;
    let rhs = parse_operand(&cli.rhs, cli.radix)?;
    log::debug!("evaluating {} {} {} (radix {})", lhs, cli.op, rhs, cli.radix);

    let result = evaluate(&lhs, cli.op, &rhs)
        .with_context(|| format!("Evaluating {} {} {}", cli.lhs, cli.op, cli.rhs))?;

    let mut lines = Vec::with_capacity(2);
    if cli.verbose {
        lines.push(format!(
            "{} {} {}",
            lhs.format_radix(cli.radix),
            cli.op,
            rhs.format_radix(cli.radix)
        ));
    }
    lines.push(result.format_radix(cli.output_radix));
    Ok(lines)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    for line in run(&cli)? {
        println!("{}", line);
    }
    Ok(())
}
