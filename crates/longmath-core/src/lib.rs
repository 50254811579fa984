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

//! # Longmath Core
//!
//! Arbitrary-precision signed integers for the long math calculator. The
//! crate provides a single value type, `BigInteger`, stored in
//! sign-magnitude form over decimal digits, together with the elementary
//! schoolbook algorithms that operate on it.
//!
//! ## Modules
//!
//! - `integer`: The `BigInteger` value type. Construction from machine
//!   integers and from text in any radix between 2 and 32, addition,
//!   subtraction, multiplication, trial-quotient long division, modulus,
//!   exponentiation, shifts via binary re-encoding, comparison, and
//!   formatting. Standard operator traits and `num_traits` integrations live
//!   here as well.
//! - `num`: Process-wide shared constants (`ZERO`, `ONE`, `TEN`).
//! - `radix`: The validated `Radix` newtype and the 32-symbol digit alphabet
//!   `0-9a-v` used for input and output.
//! - `error`: The error taxonomy (`BigIntegerError`, `ParseBigIntegerError`).
//!
//! ## Usage
//!
//! ```rust
//! use longmath_core::integer::BigInteger;
//!
//! let a: BigInteger = "100".parse().unwrap();
//! let b: BigInteger = "9".parse().unwrap();
//!
//! assert_eq!(a.divide(&b).unwrap().to_string(), "11");
//! assert_eq!(a.modulus(&b).unwrap().to_string(), "1");
//! assert_eq!(a.to_string_radix(16).unwrap(), "64");
//! ```
//!
//! Values are immutable: every operation returns a fresh `BigInteger`, so
//! values may be shared freely across threads.

pub mod error;
pub mod integer;
pub mod num;
pub mod radix;

pub use error::{BigIntegerError, ParseBigIntegerError, ParseErrorKind};
pub use integer::BigInteger;
pub use radix::Radix;
