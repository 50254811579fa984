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

//! Shifts by binary re-encoding.
//!
//! A shift renders the magnitude as a binary numeral, edits the text, and
//! parses it back through the radix-2 ingestion path. Left shifts append
//! zero bits; right shifts drop trailing bits and collapse to zero once
//! nothing is left. The sign is carried along untouched, so a negative value
//! shifts its magnitude rather than a two's-complement pattern:
//! `-5 >> 1 == -2` and `-1 >> 1 == 0`.

use super::{BigInteger, magnitude};
use crate::error::BigIntegerError;
use crate::radix::Radix;

impl BigInteger {
    /// Shifts the magnitude left by `count` bits.
    ///
    /// # Errors
    ///
    /// - `BigIntegerError::NegativeShift` if `count` is negative.
    /// - `BigIntegerError::ShiftOverflow` if the shifted numeral cannot be
    ///   allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// let v = BigInteger::from(-3);
    /// assert_eq!(v.shift_left(&BigInteger::from(4)).unwrap(), BigInteger::from(-48));
    /// assert!(v.shift_left(&BigInteger::from(-1)).is_err());
    /// ```
    pub fn shift_left(&self, count: &Self) -> Result<Self, BigIntegerError> {
        let places = Self::shift_places(count)?;
        if self.is_zero() {
            return Ok(Self::new());
        }
        places
            .and_then(|places| self.try_shift_left_by(places))
            .ok_or_else(|| {
                log::debug!("rejected left shift of {} by {} bits", self, count);
                BigIntegerError::ShiftOverflow(count.to_string())
            })
    }

    /// Shifts the magnitude right by `count` bits.
    ///
    /// # Errors
    ///
    /// Returns `BigIntegerError::NegativeShift` if `count` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// let v = BigInteger::from(1024);
    /// assert_eq!(v.shift_right(&BigInteger::from(3)).unwrap(), BigInteger::from(128));
    /// assert_eq!(v.shift_right(&BigInteger::from(64)).unwrap(), BigInteger::from(0));
    /// ```
    pub fn shift_right(&self, count: &Self) -> Result<Self, BigIntegerError> {
        match Self::shift_places(count)? {
            Some(places) => Ok(self.shift_right_by(places)),
            // More places than any binary numeral in memory can have.
            None => Ok(Self::new()),
        }
    }

    /// Appends `places` zero bits to the binary numeral of the magnitude.
    ///
    /// # Panics
    ///
    /// Panics if the shifted numeral cannot be allocated. Use `shift_left`
    /// for the fallible form.
    pub fn shift_left_by(&self, places: usize) -> Self {
        match self.try_shift_left_by(places) {
            Some(shifted) => shifted,
            None => panic!("{}", BigIntegerError::ShiftOverflow(places.to_string())),
        }
    }

    fn try_shift_left_by(&self, places: usize) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::new());
        }
        let mut bits = self.magnitude_to_radix(Radix::BINARY);
        bits.try_reserve(places).ok()?;
        bits.extend(std::iter::repeat_n('0', places));
        Self::try_from_binary(self.negative, &bits)
    }

    /// Removes up to `places` trailing bits from the binary numeral of the
    /// magnitude.
    pub fn shift_right_by(&self, places: usize) -> Self {
        self.rebuild_binary(|bits| bits.truncate(bits.len().saturating_sub(places)))
    }

    fn shift_places(count: &Self) -> Result<Option<usize>, BigIntegerError> {
        if count.is_negative() {
            log::debug!("rejected negative shift count {}", count);
            return Err(BigIntegerError::NegativeShift);
        }
        Ok(magnitude::to_u128(count.digits()).and_then(|n| usize::try_from(n).ok()))
    }

    fn rebuild_binary(&self, edit: impl FnOnce(&mut String)) -> Self {
        let mut bits = self.magnitude_to_radix(Radix::BINARY);
        edit(&mut bits);
        if bits.is_empty() {
            bits.push('0');
        }

        let values: Vec<u32> = bits.bytes().map(|b| (b - b'0') as u32).collect();
        Self::from_radix_digits(self.negative, &values, Radix::BINARY)
    }

    /// Re-parses a binary numeral, or `None` if the digit buffer cannot be
    /// allocated.
    fn try_from_binary(negative: bool, bits: &str) -> Option<Self> {
        let mut values: Vec<u32> = Vec::new();
        values.try_reserve_exact(bits.len()).ok()?;
        values.extend(bits.bytes().map(|b| (b - b'0') as u32));
        Some(Self::from_radix_digits(negative, &values, Radix::BINARY))
    }
}
