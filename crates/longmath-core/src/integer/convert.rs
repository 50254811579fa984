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

//! Parsing, formatting, and primitive conversions.
//!
//! Text in any radix between 2 and 32 is ingested into the canonical
//! decimal magnitude. Decimal text maps directly onto digits; every other
//! radix is interpreted as a positional numeral and evaluated with the
//! engine's own multiplication and addition, so all later operations see a
//! single representation regardless of the input base. Output in a
//! non-decimal radix repeatedly divides the magnitude by the radix and
//! collects the remainders.

use super::{BigInteger, magnitude};
use crate::error::{BigIntegerError, ParseBigIntegerError, ParseErrorKind};
use crate::num::constants::{ONE, TEN, ZERO};
use crate::radix::Radix;
use std::fmt;
use std::str::FromStr;

impl BigInteger {
    /// Parses `text` as an integer in the given radix.
    ///
    /// An optional leading `-` sets the sign; the remaining characters
    /// must be digits of `radix` (`0`-`9`, then `a`-`v`, case-insensitive).
    /// Leading zeros are ignored and `-0` yields zero.
    ///
    /// # Errors
    ///
    /// - `BigIntegerError::InvalidRadix` if `radix` lies outside `2..=32`.
    /// - `BigIntegerError::Parse` if the text has no digits or contains a
    ///   character outside the radix alphabet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// assert_eq!(BigInteger::from_str_radix("-101", 2).unwrap().to_string(), "-5");
    /// assert_eq!(BigInteger::from_str_radix("00042", 10).unwrap().to_string(), "42");
    /// assert_eq!(BigInteger::from_str_radix("vv", 32).unwrap().to_string(), "1023");
    /// assert!(BigInteger::from_str_radix("12", 2).is_err());
    /// assert!(BigInteger::from_str_radix("-", 10).is_err());
    /// ```
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, BigIntegerError> {
        Self::parse_radix(text, Radix::new(radix)?)
    }

    /// Parses `text` as an integer in an already validated radix.
    ///
    /// # Errors
    ///
    /// Returns `BigIntegerError::Parse` if the text has no digits or contains
    /// a character outside the radix alphabet.
    pub fn parse_radix(text: &str, radix: Radix) -> Result<Self, BigIntegerError> {
        let (negative, body, offset) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..], 1),
            _ => (false, text, 0),
        };

        if body.is_empty() {
            return Err(ParseBigIntegerError::new(text, ParseErrorKind::Empty).into());
        }

        let mut values = Vec::with_capacity(body.len());
        for (i, c) in body.char_indices() {
            let value = radix.digit_value(c).ok_or_else(|| {
                ParseBigIntegerError::new(
                    text,
                    ParseErrorKind::InvalidDigit {
                        digit: c,
                        position: offset + i,
                        radix: radix.get(),
                    },
                )
            })?;
            values.push(value);
        }

        Ok(Self::from_radix_digits(negative, &values, radix).with_source_radix(radix))
    }

    /// Evaluates digit values (most significant first) as a numeral in
    /// `radix`.
    ///
    /// The i-th digit from the right is weighted by `radix^i`; weights and
    /// the running sum are computed with `BigInteger` arithmetic.
    pub(crate) fn from_radix_digits(negative: bool, values: &[u32], radix: Radix) -> Self {
        if radix.is_decimal() {
            let digits = values.iter().rev().map(|&v| v as u8).collect();
            return Self::from_parts(negative, digits);
        }

        let base = Self::from(radix.get());
        let mut weight = ONE.clone();
        let mut value = ZERO.clone();

        for &digit in values.iter().rev() {
            if digit != 0 {
                value = value.add(&Self::from(digit).multiply(&weight));
            }
            weight = weight.multiply(&base);
        }

        log::trace!(
            "ingested {} radix-{} digits into {} decimal digits",
            values.len(),
            radix,
            value.num_digits()
        );

        if negative { value.negate() } else { value }
    }

    /// Renders the magnitude (without sign) in `radix`.
    pub(crate) fn magnitude_to_radix(&self, radix: Radix) -> String {
        if radix.is_decimal() {
            return self.digits.iter().rev().map(|&d| (d + b'0') as char).collect();
        }
        if self.is_zero() {
            return String::from("0");
        }

        let divisor = magnitude::from_u128(radix.get() as u128);
        let mut rest = self.digits.clone();
        let mut symbols = Vec::new();

        while !magnitude::is_zero(&rest) {
            let (quotient, remainder) = magnitude::div_rem(&rest, &divisor);
            // The remainder is below the radix, so it fits into a single symbol.
            let value = remainder
                .iter()
                .rev()
                .fold(0u32, |acc, &d| acc * magnitude::BASE as u32 + d as u32);
            symbols.push(Radix::digit_char(value));
            rest = quotient;
        }

        symbols.iter().rev().collect()
    }

    /// Renders the value in `radix`, prefixing `-` for negative values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::{integer::BigInteger, radix::Radix};
    /// let v = BigInteger::from(-255);
    /// assert_eq!(v.format_radix(Radix::HEXADECIMAL), "-ff");
    /// assert_eq!(v.format_radix(Radix::BINARY), "-11111111");
    /// assert_eq!(v.format_radix(Radix::DECIMAL), "-255");
    /// ```
    pub fn format_radix(&self, radix: Radix) -> String {
        let magnitude = self.magnitude_to_radix(radix);
        if self.negative {
            format!("-{magnitude}")
        } else {
            magnitude
        }
    }

    /// Renders the value in `radix`.
    ///
    /// # Errors
    ///
    /// Returns `BigIntegerError::InvalidRadix` if `radix` lies outside
    /// `2..=32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// let v = BigInteger::from(1023);
    /// assert_eq!(v.to_string_radix(32).unwrap(), "vv");
    /// assert_eq!(v.to_string_radix(10).unwrap(), "1023");
    /// assert!(v.to_string_radix(64).is_err());
    /// ```
    pub fn to_string_radix(&self, radix: u32) -> Result<String, BigIntegerError> {
        Ok(self.format_radix(Radix::new(radix)?))
    }

    /// Returns `self * 10^places`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use longmath_core::integer::BigInteger;
    /// assert_eq!(BigInteger::from(-42).scale_by_ten(3).to_string(), "-42000");
    /// ```
    pub fn scale_by_ten(&self, places: u32) -> Self {
        self.multiply(&TEN.pow_u32(places))
    }
}

impl FromStr for BigInteger {
    type Err = BigIntegerError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(s, Radix::DECIMAL)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_to_radix(Radix::DECIMAL))
    }
}

impl fmt::Binary for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0b", &self.magnitude_to_radix(Radix::BINARY))
    }
}

impl fmt::Octal for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0o", &self.magnitude_to_radix(Radix::OCTAL))
    }
}

impl fmt::LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(
            !self.negative,
            "0x",
            &self.magnitude_to_radix(Radix::HEXADECIMAL),
        )
    }
}

impl fmt::UpperHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(
            !self.negative,
            "0x",
            &self
                .magnitude_to_radix(Radix::HEXADECIMAL)
                .to_ascii_uppercase(),
        )
    }
}

macro_rules! impl_from_unsigned {
    ($t:ty) => {
        impl From<$t> for BigInteger {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from_parts(false, magnitude::from_u128(value as u128))
            }
        }
    };
}

macro_rules! impl_from_signed {
    ($t:ty) => {
        impl From<$t> for BigInteger {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from_parts(
                    value < 0,
                    magnitude::from_u128((value as i128).unsigned_abs()),
                )
            }
        }
    };
}

impl_from_unsigned!(u8);
impl_from_unsigned!(u16);
impl_from_unsigned!(u32);
impl_from_unsigned!(u64);
impl_from_unsigned!(u128);
impl_from_unsigned!(usize);

impl_from_signed!(i8);
impl_from_signed!(i16);
impl_from_signed!(i32);
impl_from_signed!(i64);
impl_from_signed!(i128);
impl_from_signed!(isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(bi("0").to_string(), "0");
        assert_eq!(bi("-0").to_string(), "0");
        assert_eq!(bi("000").to_string(), "0");
        assert_eq!(bi("-000").to_string(), "0");
        assert_eq!(bi("007").to_string(), "7");
        assert_eq!(bi("-007").to_string(), "-7");
        assert_eq!(
            bi("123456789012345678901234567890").to_string(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_parse_empty() {
        for input in ["", "-"] {
            match input.parse::<BigInteger>() {
                Err(BigIntegerError::Parse(e)) => {
                    assert_eq!(e.input, input);
                    assert_eq!(e.kind, ParseErrorKind::Empty);
                }
                other => panic!("Expected empty parse error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_plus_sign() {
        for input in ["+15", "+", "-+1"] {
            let expected_position = if input.starts_with('-') { 1 } else { 0 };
            match input.parse::<BigInteger>() {
                Err(BigIntegerError::Parse(e)) => {
                    assert_eq!(
                        e.kind,
                        ParseErrorKind::InvalidDigit {
                            digit: '+',
                            position: expected_position,
                            radix: 10,
                        }
                    );
                }
                other => panic!("Expected invalid digit error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_invalid_digit_position() {
        match "-12x4".parse::<BigInteger>() {
            Err(BigIntegerError::Parse(e)) => {
                assert_eq!(e.input, "-12x4");
                assert_eq!(
                    e.kind,
                    ParseErrorKind::InvalidDigit {
                        digit: 'x',
                        position: 3,
                        radix: 10
                    }
                );
            }
            other => panic!("Expected invalid digit error, got {:?}", other),
        }

        assert!("1 2".parse::<BigInteger>().is_err());
        assert!("--1".parse::<BigInteger>().is_err());
        assert!("1-".parse::<BigInteger>().is_err());
    }

    #[test]
    fn test_parse_invalid_radix() {
        assert_eq!(
            BigInteger::from_str_radix("1", 1),
            Err(BigIntegerError::InvalidRadix(1))
        );
        assert_eq!(
            BigInteger::from_str_radix("1", 33),
            Err(BigIntegerError::InvalidRadix(33))
        );
    }

    #[test]
    fn test_parse_radix_digits_outside_alphabet() {
        assert!(BigInteger::from_str_radix("2", 2).is_err());
        assert!(BigInteger::from_str_radix("8", 8).is_err());
        assert!(BigInteger::from_str_radix("g", 16).is_err());
        assert!(BigInteger::from_str_radix("w", 32).is_err());
    }

    #[test]
    fn test_parse_non_decimal() {
        let cases = [
            ("1111111111", 2, "1023"),
            ("-777", 8, "-511"),
            ("DeadBeef", 16, "3735928559"),
            ("10", 32, "32"),
        ];
        for (text, radix, expected) in cases {
            let v = BigInteger::from_str_radix(text, radix).unwrap();
            assert_eq!(v.to_string(), expected);
        }
        assert_eq!(
            BigInteger::from_str_radix("0000101", 2).unwrap().to_string(),
            "5"
        );
        assert_eq!(
            BigInteger::from_str_radix("-0", 16).unwrap().to_string(),
            "0"
        );
    }

    #[test]
    fn test_parse_records_source_radix() {
        let v = BigInteger::from_str_radix("10", 3).unwrap();
        assert_eq!(v.source_radix(), Radix::try_new(3).unwrap());
        assert_eq!(v, BigInteger::from(3));
        // Arithmetic results are decimal.
        assert_eq!(v.add(&v).source_radix(), Radix::DECIMAL);
    }

    #[test]
    fn test_to_string_radix() {
        let v = bi("3735928559");
        assert_eq!(v.to_string_radix(16).unwrap(), "deadbeef");
        assert_eq!(v.to_string_radix(2).unwrap(), "11011110101011011011111011101111");
        assert_eq!(bi("0").to_string_radix(2).unwrap(), "0");
        assert_eq!(bi("-1").to_string_radix(7).unwrap(), "-1");
        assert_eq!(bi("31").to_string_radix(32).unwrap(), "v");
        assert_eq!(bi("32").to_string_radix(32).unwrap(), "10");
    }

    #[test]
    fn test_radix_round_trip() {
        let values = ["0", "1", "-1", "255", "-65536", "98765432109876543210123"];
        for radix in 2..=32 {
            for s in values {
                let v = bi(s);
                let text = v.to_string_radix(radix).unwrap();
                assert_eq!(BigInteger::from_str_radix(&text, radix).unwrap(), v);
            }
        }
    }

    #[test]
    fn test_display_flags() {
        let v = bi("-42");
        assert_eq!(format!("{}", v), "-42");
        assert_eq!(format!("{:>6}", v), "   -42");
        assert_eq!(format!("{:06}", v), "-00042");
        assert_eq!(format!("{:+}", bi("42")), "+42");
    }

    #[test]
    fn test_radix_formatting_traits() {
        let v = bi("255");
        assert_eq!(format!("{:b}", v), "11111111");
        assert_eq!(format!("{:#b}", v), "0b11111111");
        assert_eq!(format!("{:o}", v), "377");
        assert_eq!(format!("{:x}", v), "ff");
        assert_eq!(format!("{:#X}", v), "0xFF");
        assert_eq!(format!("{:x}", bi("-255")), "-ff");
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(BigInteger::from(0u8).to_string(), "0");
        assert_eq!(BigInteger::from(-1i8).to_string(), "-1");
        assert_eq!(BigInteger::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(BigInteger::from(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(BigInteger::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(BigInteger::from(usize::MAX).to_string(), usize::MAX.to_string());
    }

    #[test]
    fn test_scale_by_ten() {
        assert_eq!(bi("7").scale_by_ten(0), bi("7"));
        assert_eq!(bi("7").scale_by_ten(5), bi("700000"));
        assert_eq!(bi("0").scale_by_ten(5), bi("0"));
    }
}
