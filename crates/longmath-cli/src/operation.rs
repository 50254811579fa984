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

//! Calculator operations and their dispatch onto the engine.

use longmath_core::{BigInteger, BigIntegerError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The binary operations the calculator offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `lhs + rhs`.
    Add,
    /// `lhs - rhs`.
    Subtract,
    /// `lhs × rhs`.
    Multiply,
    /// Truncating quotient `lhs ÷ rhs`.
    Divide,
    /// Remainder of the truncating division, signed like `lhs`.
    Modulus,
    /// `lhs` raised to the non-negative power `rhs`.
    Pow,
    /// Magnitude of `lhs` shifted left by `rhs` bits.
    ShiftLeft,
    /// Magnitude of `lhs` shifted right by `rhs` bits.
    ShiftRight,
}

impl Operation {
    /// The symbol shown between the operands.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Modulus => "%",
            Operation::Pow => "^",
            Operation::ShiftLeft => "<<",
            Operation::ShiftRight => ">>",
        }
    }

    /// Applies the operation to `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error for a zero divisor, a negative exponent,
    /// or an unusable shift count.
    pub fn apply(self, lhs: &BigInteger, rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        match self {
            Operation::Add => Ok(lhs.add(rhs)),
            Operation::Subtract => Ok(lhs.subtract(rhs)),
            Operation::Multiply => Ok(lhs.multiply(rhs)),
            Operation::Divide => lhs.divide(rhs),
            Operation::Modulus => lhs.modulus(rhs),
            Operation::Pow => lhs.pow(rhs),
            Operation::ShiftLeft => lhs.shift_left(rhs),
            Operation::ShiftRight => lhs.shift_right(rhs),
        }
    }
}

/// Evaluates `lhs op rhs` with a single engine call.
#[inline]
pub fn evaluate(
    lhs: &BigInteger,
    op: Operation,
    rhs: &BigInteger,
) -> Result<BigInteger, BigIntegerError> {
    op.apply(lhs, rhs)
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operation '{0}' (expected one of + - * / % ^ << >>)")]
pub struct UnknownOperationError(pub String);

impl FromStr for Operation {
    type Err = UnknownOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Operation::Add,
            "-" | "sub" | "subtract" | "minus" => Operation::Subtract,
            "*" | "x" | "×" | "mul" | "multiply" | "times" => Operation::Multiply,
            "/" | "÷" | "div" | "divide" => Operation::Divide,
            "%" | "mod" | "modulus" | "rem" => Operation::Modulus,
            "^" | "**" | "pow" | "power" => Operation::Pow,
            "<<" | "shl" => Operation::ShiftLeft,
            ">>" | "shr" => Operation::ShiftRight,
            _ => return Err(UnknownOperationError(s.to_string())),
        };
        Ok(op)
    }
}
