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

//! # Numeral Radix
//!
//! A validated base for positional numerals. `Radix` wraps a `u32` in
//! `2..=32` and owns the digit alphabet `0123456789abcdefghijklmnopqrstuv`
//! shared by parsing and formatting. Upper-case letters are accepted on
//! input and treated like their lower-case counterparts; output always uses
//! lower case.
//!
//! ## Usage
//!
//! ```rust
//! use longmath_core::radix::Radix;
//!
//! let hex = Radix::new(16).unwrap();
//! assert_eq!(hex.digit_value('F'), Some(15));
//! assert_eq!(hex.digit_value('g'), None);
//! assert_eq!(Radix::MAX.digit_value('v'), Some(31));
//! assert!(Radix::new(33).is_err());
//! ```

use crate::error::BigIntegerError;

/// The digit symbols used for every supported radix, in ascending value.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// A positional numeral base in `2..=32`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Radix(u32);

impl Radix {
    /// The smallest supported radix.
    pub const MIN: Self = Self(2);
    /// The largest supported radix.
    pub const MAX: Self = Self(32);
    /// Base 2.
    pub const BINARY: Self = Self(2);
    /// Base 8.
    pub const OCTAL: Self = Self(8);
    /// Base 10, the internal storage base.
    pub const DECIMAL: Self = Self(10);
    /// Base 16.
    pub const HEXADECIMAL: Self = Self(16);

    /// Creates a new `Radix`, rejecting values outside `2..=32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::radix::Radix;
    /// # use longmath_core::error::BigIntegerError;
    /// assert_eq!(Radix::new(8).unwrap().get(), 8);
    /// assert_eq!(Radix::new(1), Err(BigIntegerError::InvalidRadix(1)));
    /// ```
    #[inline]
    pub fn new(value: u32) -> Result<Self, BigIntegerError> {
        Self::try_new(value).ok_or(BigIntegerError::InvalidRadix(value))
    }

    /// Creates a new `Radix`, returning `None` for values outside `2..=32`.
    #[inline]
    pub const fn try_new(value: u32) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric base.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` if this is base 10.
    #[inline]
    pub const fn is_decimal(self) -> bool {
        self.0 == 10
    }

    /// Returns the value of `c` as a digit of this radix, or `None` if the
    /// character is not part of the alphabet for this radix.
    #[inline]
    pub fn digit_value(self, c: char) -> Option<u32> {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'a'..='z' => c as u32 - 'a' as u32 + 10,
            'A'..='Z' => c as u32 - 'A' as u32 + 10,
            _ => return None,
        };
        (value < self.0).then_some(value)
    }

    /// Returns the symbol for a digit value.
    ///
    /// # Panics
    ///
    /// Panics if `value >= 32`.
    #[inline]
    pub(crate) fn digit_char(value: u32) -> char {
        ALPHABET[value as usize] as char
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Radix {
    type Error = BigIntegerError;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Radix> for u32 {
    #[inline]
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Radix::try_new(0).is_none());
        assert!(Radix::try_new(1).is_none());
        assert_eq!(Radix::try_new(2), Some(Radix::BINARY));
        assert_eq!(Radix::try_new(32), Some(Radix::MAX));
        assert!(Radix::try_new(33).is_none());
        assert_eq!(Radix::new(36), Err(BigIntegerError::InvalidRadix(36)));
    }

    #[test]
    fn test_default_is_decimal() {
        assert_eq!(Radix::default(), Radix::DECIMAL);
        assert!(Radix::default().is_decimal());
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(Radix::BINARY.digit_value('1'), Some(1));
        assert_eq!(Radix::BINARY.digit_value('2'), None);
        assert_eq!(Radix::DECIMAL.digit_value('9'), Some(9));
        assert_eq!(Radix::DECIMAL.digit_value('a'), None);
        assert_eq!(Radix::HEXADECIMAL.digit_value('f'), Some(15));
        assert_eq!(Radix::HEXADECIMAL.digit_value('F'), Some(15));
        assert_eq!(Radix::MAX.digit_value('v'), Some(31));
        assert_eq!(Radix::MAX.digit_value('w'), None);
        assert_eq!(Radix::MAX.digit_value('-'), None);
    }

    #[test]
    fn test_digit_char_covers_alphabet() {
        let rendered: String = (0..32).map(Radix::digit_char).collect();
        assert_eq!(rendered, "0123456789abcdefghijklmnopqrstuv");
    }

    #[test]
    fn test_digit_char_inverts_digit_value() {
        for value in 0..32 {
            assert_eq!(Radix::MAX.digit_value(Radix::digit_char(value)), Some(value));
        }
    }

    #[test]
    #[should_panic]
    fn test_digit_char_outside_alphabet() {
        let _ = Radix::digit_char(32);
    }

    #[test]
    fn test_conversions() {
        let r = Radix::try_from(16).unwrap();
        assert_eq!(u32::from(r), 16);
        assert_eq!(format!("{}", r), "16");
    }
}
