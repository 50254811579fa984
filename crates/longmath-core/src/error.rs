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

//! Error types for integer construction and arithmetic.
//!
//! Every fallible operation on `BigInteger` reports one of the variants of
//! `BigIntegerError`. Parsing failures carry a `ParseBigIntegerError` with
//! the offending input and the reason it was rejected, so callers can point
//! directly at the bad character.

use thiserror::Error;

/// The error type for all fallible `BigInteger` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntegerError {
    /// The input text is not a valid integer in the requested radix.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseBigIntegerError),
    /// The requested radix lies outside `2..=32`.
    #[error("Radix {0} is not supported (expected a value in 2..=32)")]
    InvalidRadix(u32),
    /// The divisor of a division or modulus is zero.
    #[error("Attempt to divide by zero")]
    DivisionByZero,
    /// A negative exponent was passed to `pow`.
    #[error("Exponent must be non-negative")]
    InvalidExponent,
    /// A negative shift count was passed to `shift_left` or `shift_right`.
    #[error("Shift count must be non-negative")]
    NegativeShift,
    /// A left shift count does not fit into addressable memory.
    #[error("Shift count {0} is too large")]
    ShiftOverflow(String),
}

/// Details about a failed attempt to parse an integer from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not parse '{input}' as an integer: {kind}")]
pub struct ParseBigIntegerError {
    /// The text that failed to parse.
    pub input: String,
    /// Why the text was rejected.
    pub kind: ParseErrorKind,
}

/// The reason a piece of text could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The text is empty or consists of a sign only.
    #[error("no digits found")]
    Empty,
    /// A character is not a digit of the requested radix.
    #[error("invalid digit '{digit}' at position {position} for radix {radix}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Byte offset of the character in the input.
        position: usize,
        /// The radix the digit was checked against.
        radix: u32,
    },
}

impl ParseBigIntegerError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }
}
