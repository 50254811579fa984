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

//! Sign dispatch for the arithmetic operations.
//!
//! Mixed-sign additions and subtractions are rewritten until both operands
//! share a sign, at which point the unsigned digit algorithms in
//! `magnitude` do the work. Division and modulus operate on absolute values
//! and attach the sign afterwards; the remainder is derived from the
//! truncating quotient, so it always carries the sign of the dividend.

use super::{BigInteger, magnitude};
use crate::error::BigIntegerError;
use crate::num::constants::ONE;
use std::cmp::Ordering;

impl BigInteger {
    /// Returns `self + other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// let a = BigInteger::from(-7);
    /// let b = BigInteger::from(10);
    /// assert_eq!(a.add(&b), BigInteger::from(3));
    /// ```
    pub fn add(&self, other: &Self) -> Self {
        match (self.negative, other.negative) {
            // -a + b == b - a
            (true, false) => other.subtract(&self.negate()),
            // a + -b == a - b
            (false, true) => self.subtract(&other.negate()),
            _ => Self::from_parts(self.negative, magnitude::add(&self.digits, &other.digits)),
        }
    }

    /// Returns `self - other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// let a = BigInteger::from(1000);
    /// assert_eq!(a.subtract(&BigInteger::from(1)).to_string(), "999");
    /// assert_eq!(BigInteger::from(1).subtract(&a).to_string(), "-999");
    /// ```
    pub fn subtract(&self, other: &Self) -> Self {
        if self.negative || other.negative {
            // a - b == a + -b
            return self.add(&other.negate());
        }

        match magnitude::cmp(&self.digits, &other.digits) {
            Ordering::Less => Self::from_parts(true, magnitude::sub(&other.digits, &self.digits)),
            _ => Self::from_parts(false, magnitude::sub(&self.digits, &other.digits)),
        }
    }

    /// Returns `self * other` using schoolbook long multiplication.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// let a = BigInteger::from(99);
    /// assert_eq!(a.multiply(&a).to_string(), "9801");
    /// assert_eq!(a.multiply(&BigInteger::from(-2)).to_string(), "-198");
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_parts(
            self.negative != other.negative,
            magnitude::mul(&self.digits, &other.digits),
        )
    }

    /// Returns the truncating quotient `self / other`.
    ///
    /// The quotient is computed by trial-quotient long division over the
    /// absolute values and is negative iff the operand signs differ.
    ///
    /// # Errors
    ///
    /// Returns `BigIntegerError::DivisionByZero` if `other` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::{error::BigIntegerError, integer::BigInteger};
    /// let a = BigInteger::from(100);
    /// assert_eq!(a.divide(&BigInteger::from(9)).unwrap().to_string(), "11");
    /// assert_eq!(a.divide(&BigInteger::from(-9)).unwrap().to_string(), "-11");
    /// assert_eq!(a.divide(&BigInteger::new()), Err(BigIntegerError::DivisionByZero));
    /// ```
    pub fn divide(&self, other: &Self) -> Result<Self, BigIntegerError> {
        self.div_rem_digits(other)
            .map(|(quotient, _)| quotient)
    }

    /// Returns `self mod other`, defined as `self - other * (self / other)`.
    ///
    /// Division truncates toward zero, so a non-zero remainder takes the
    /// sign of the dividend rather than that of the divisor.
    ///
    /// # Errors
    ///
    /// Returns `BigIntegerError::DivisionByZero` if `other` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// let m = |a: i32, b: i32| {
    ///     BigInteger::from(a).modulus(&BigInteger::from(b)).unwrap().to_string()
    /// };
    /// assert_eq!(m(100, 9), "1");
    /// assert_eq!(m(-7, 2), "-1");
    /// assert_eq!(m(7, -2), "1");
    /// ```
    pub fn modulus(&self, other: &Self) -> Result<Self, BigIntegerError> {
        let quotient = self.divide(other)?;
        Ok(self.subtract(&other.multiply(&quotient)))
    }

    /// Returns the truncating quotient and the matching remainder.
    ///
    /// # Errors
    ///
    /// Returns `BigIntegerError::DivisionByZero` if `other` is zero.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), BigIntegerError> {
        let quotient = self.divide(other)?;
        let remainder = self.subtract(&other.multiply(&quotient));
        Ok((quotient, remainder))
    }

    fn div_rem_digits(&self, other: &Self) -> Result<(Self, Self), BigIntegerError> {
        if other.is_zero() {
            log::debug!("rejected division of {} by zero", self);
            return Err(BigIntegerError::DivisionByZero);
        }

        if other.is_one() {
            return Ok((Self::from_parts(self.negative, self.digits.clone()), Self::new()));
        }

        let negative = self.negative != other.negative;
        if magnitude::cmp(&self.digits, &other.digits) == Ordering::Equal {
            return Ok((Self::from_parts(negative, vec![1]), Self::new()));
        }

        let (quotient, remainder) = magnitude::div_rem(&self.digits, &other.digits);
        Ok((
            Self::from_parts(negative, quotient),
            Self::from_parts(self.negative, remainder),
        ))
    }

    /// Raises `self` to a non-negative power by repeated multiplication.
    ///
    /// # Errors
    ///
    /// Returns `BigIntegerError::InvalidExponent` if `exponent` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::{error::BigIntegerError, integer::BigInteger};
    /// let two = BigInteger::from(2);
    /// assert_eq!(two.pow(&BigInteger::from(10)).unwrap().to_string(), "1024");
    /// assert_eq!(two.pow(&BigInteger::from(-1)), Err(BigIntegerError::InvalidExponent));
    /// ```
    pub fn pow(&self, exponent: &Self) -> Result<Self, BigIntegerError> {
        if exponent.is_negative() {
            log::debug!("rejected negative exponent {}", exponent);
            return Err(BigIntegerError::InvalidExponent);
        }
        if exponent.is_zero() {
            return Ok(ONE.clone());
        }
        if exponent.is_one() {
            return Ok(Self::from_parts(self.negative, self.digits.clone()));
        }

        let mut value = Self::from_parts(self.negative, self.digits.clone());
        let mut i = ONE.clone();
        while i < *exponent {
            value = value.multiply(self);
            i = i.increment();
        }
        Ok(value)
    }

    /// Raises `self` to a machine-sized power by repeated multiplication.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// assert_eq!(BigInteger::from(-3).pow_u32(3), BigInteger::from(-27));
    /// assert_eq!(BigInteger::from(0).pow_u32(0), BigInteger::from(1));
    /// ```
    pub fn pow_u32(&self, exponent: u32) -> Self {
        match exponent {
            0 => ONE.clone(),
            1 => Self::from_parts(self.negative, self.digits.clone()),
            _ => (1..exponent).fold(
                Self::from_parts(self.negative, self.digits.clone()),
                |value, _| value.multiply(self),
            ),
        }
    }
}
