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

//! # Arbitrary-Precision Integers
//!
//! `BigInteger` is an immutable sign-magnitude integer whose magnitude is a
//! sequence of decimal digits. Every operation is a pure function producing
//! a new value; "mutating" operators such as `+=` simply rebind the left
//! operand to the freshly computed result.
//!
//! ## Representation
//!
//! - `negative` is `true` iff the value is strictly below zero. Zero is
//!   never negative.
//! - The magnitude holds decimal digit values, least significant first, with
//!   no high-order zero digits unless the value is exactly zero.
//! - `source_radix` remembers the base the value was parsed from. It is
//!   informational only and never participates in equality, ordering, or
//!   hashing.
//!
//! ## Algorithms
//!
//! All arithmetic is schoolbook: digit-wise addition and subtraction with
//! carry/borrow, long multiplication by accumulated partial products,
//! trial-quotient long division, linear exponentiation, and shifts that
//! re-encode the value as a binary numeral. See the submodules:
//!
//! - `arith`: Sign dispatch for the arithmetic operations.
//! - `convert`: Radix-aware parsing, formatting, and primitive conversions.
//! - `shift`: Shifts by binary re-encoding.
//! - `ops`: Operator trait implementations.
//! - `traits`: `num_traits` integrations.

mod arith;
mod convert;
pub(crate) mod magnitude;
mod ops;
mod shift;
mod traits;

use crate::radix::Radix;
use magnitude::Digits;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An immutable arbitrary-precision signed integer.
///
/// # Examples
///
/// ```rust
/// use longmath_core::integer::BigInteger;
///
/// let a: BigInteger = "123".parse().unwrap();
/// let b = BigInteger::from(456);
/// assert_eq!(a.add(&b).to_string(), "579");
///
/// let c = BigInteger::from_str_radix("-ff", 16).unwrap();
/// assert_eq!(c.to_string(), "-255");
/// ```
#[derive(Clone)]
pub struct BigInteger {
    negative: bool,
    digits: Digits,
    source_radix: Radix,
}

impl BigInteger {
    /// Creates a new `BigInteger` equal to zero.
    #[inline]
    pub fn new() -> Self {
        Self::from_parts(false, vec![0])
    }

    /// Builds a value from a sign and a magnitude, normalising both.
    ///
    /// High-order zero digits are stripped and a zero magnitude always ends
    /// up non-negative.
    pub(crate) fn from_parts(negative: bool, mut digits: Digits) -> Self {
        magnitude::normalize(&mut digits);
        let negative = negative && !magnitude::is_zero(&digits);
        Self {
            negative,
            digits,
            source_radix: Radix::DECIMAL,
        }
    }

    #[inline]
    pub(crate) fn with_source_radix(mut self, radix: Radix) -> Self {
        self.source_radix = radix;
        self
    }

    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the radix this value was most recently parsed from.
    ///
    /// Values produced by arithmetic report base 10.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::{integer::BigInteger, radix::Radix};
    /// let v = BigInteger::from_str_radix("777", 8).unwrap();
    /// assert_eq!(v.source_radix(), Radix::OCTAL);
    /// assert_eq!(v, BigInteger::from(511));
    /// ```
    #[inline]
    pub fn source_radix(&self) -> Radix {
        self.source_radix
    }

    /// Returns `true` if the value is strictly below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if the value is strictly above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Returns `true` if the value is zero or above.
    #[inline]
    pub fn is_non_negative(&self) -> bool {
        !self.negative
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        magnitude::is_zero(&self.digits)
    }

    /// Returns `true` if the value is exactly one.
    #[inline]
    pub fn is_one(&self) -> bool {
        !self.negative && magnitude::is_one(&self.digits)
    }

    /// Returns `-1`, `0`, or `1` depending on the sign of the value.
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::new()
        } else {
            Self::from_parts(self.negative, vec![1])
        }
    }

    /// Returns the value with its sign flipped. Zero stays zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// assert_eq!(BigInteger::from(5).negate(), BigInteger::from(-5));
    /// assert_eq!(BigInteger::from(0).negate(), BigInteger::from(0));
    /// ```
    pub fn negate(&self) -> Self {
        Self::from_parts(!self.negative, self.digits.clone())
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.digits.clone())
    }

    /// Returns the number of decimal digits in the magnitude.
    #[inline]
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    /// Returns the length of the binary numeral of the magnitude.
    ///
    /// Zero renders as `"0"`, so its bit length is `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// assert_eq!(BigInteger::from(255).bit_length(), 8);
    /// assert_eq!(BigInteger::from(-256).bit_length(), 9);
    /// ```
    pub fn bit_length(&self) -> usize {
        self.magnitude_to_radix(Radix::BINARY).len()
    }

    /// Three-way comparison underlying every relational operator.
    ///
    /// Differing signs decide immediately. Otherwise the magnitudes are
    /// compared (longer first, then digit by digit) and the outcome is
    /// inverted when both values are negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// use std::cmp::Ordering;
    ///
    /// let a = BigInteger::from(-5);
    /// let b = BigInteger::from(3);
    /// assert_eq!(a.compare(&b), Ordering::Less);
    /// assert_eq!(a.compare(&b) as i8, -1);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => magnitude::cmp(&self.digits, &other.digits),
            (true, true) => magnitude::cmp(&self.digits, &other.digits).reverse(),
        }
    }

    /// Returns `self + 1`.
    #[inline]
    pub fn increment(&self) -> Self {
        self.add(&crate::num::constants::ONE)
    }

    /// Returns `self - 1`.
    #[inline]
    pub fn decrement(&self) -> Self {
        self.subtract(&crate::num::constants::ONE)
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.digits.hash(state);
    }
}

impl std::fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}
