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

//! `num_traits` integrations.
//!
//! These impls let `BigInteger` slot into generic numeric code written
//! against `num_traits` bounds (`Num`, `Signed`, `CheckedDiv`, ...). Each
//! one delegates to the inherent method of the same meaning.

use super::{BigInteger, magnitude};
use crate::error::BigIntegerError;
use crate::num::constants::{ONE, ZERO};
use num_traits::{
    CheckedDiv, CheckedRem, FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero,
};

impl Zero for BigInteger {
    #[inline]
    fn zero() -> Self {
        ZERO.clone()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }
}

impl One for BigInteger {
    #[inline]
    fn one() -> Self {
        ONE.clone()
    }

    #[inline]
    fn is_one(&self) -> bool {
        BigInteger::is_one(self)
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = BigIntegerError;

    #[inline]
    fn from_str_radix(text: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        BigInteger::from_str_radix(text, radix)
    }
}

impl Signed for BigInteger {
    #[inline]
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            BigInteger::new()
        } else {
            self.subtract(other)
        }
    }

    #[inline]
    fn signum(&self) -> Self {
        BigInteger::signum(self)
    }

    #[inline]
    fn is_positive(&self) -> bool {
        BigInteger::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        BigInteger::is_negative(self)
    }
}

impl Pow<u32> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn pow(self, exponent: u32) -> BigInteger {
        self.pow_u32(exponent)
    }
}

impl CheckedDiv for BigInteger {
    #[inline]
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.divide(v).ok()
    }
}

impl CheckedRem for BigInteger {
    #[inline]
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        self.modulus(v).ok()
    }
}

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let m = magnitude::to_u128(&self.digits)?;
        if !self.negative {
            return i128::try_from(m).ok();
        }
        if m == i128::MIN.unsigned_abs() {
            Some(i128::MIN)
        } else {
            i128::try_from(m).ok().map(|v| -v)
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.negative {
            None
        } else {
            magnitude::to_u128(&self.digits)
        }
    }
}

impl FromPrimitive for BigInteger {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    fn sum_of_squares<T: Num + Clone>(values: &[T]) -> T {
        values
            .iter()
            .cloned()
            .fold(T::zero(), |acc, v| acc + v.clone() * v)
    }

    fn distance<T: Signed + Clone>(a: &T, b: &T) -> T {
        (a.clone() - b.clone()).abs()
    }

    #[test]
    fn test_zero_and_one() {
        assert!(<BigInteger as Zero>::zero().is_zero());
        assert!(<BigInteger as One>::one().is_one());
        assert!(!bi("-1").is_one());
    }

    #[test]
    fn test_generic_num_code() {
        let values = [bi("3"), bi("-4"), bi("12")];
        assert_eq!(sum_of_squares(&values), bi("169"));
        assert_eq!(distance(&bi("-5"), &bi("7")), bi("12"));
    }

    #[test]
    fn test_num_from_str_radix() {
        let v = <BigInteger as Num>::from_str_radix("-zz", 36);
        assert_eq!(v, Err(BigIntegerError::InvalidRadix(36)));
        let v = <BigInteger as Num>::from_str_radix("-vv", 32).unwrap();
        assert_eq!(v, bi("-1023"));
    }

    #[test]
    fn test_signed() {
        assert_eq!(Signed::abs(&bi("-3")), bi("3"));
        assert_eq!(Signed::abs_sub(&bi("3"), &bi("5")), bi("0"));
        assert_eq!(Signed::abs_sub(&bi("5"), &bi("3")), bi("2"));
        assert_eq!(Signed::signum(&bi("-99")), bi("-1"));
        assert!(Signed::is_negative(&bi("-1")));
        assert!(!Signed::is_positive(&bi("0")));
    }

    #[test]
    fn test_pow_trait() {
        assert_eq!(Pow::pow(&bi("2"), 64u32), bi("18446744073709551616"));
    }

    #[test]
    fn test_checked_div_rem() {
        assert_eq!(bi("7").checked_div(&bi("2")), Some(bi("3")));
        assert_eq!(bi("7").checked_div(&bi("0")), None);
        assert_eq!(bi("-7").checked_rem(&bi("2")), Some(bi("-1")));
        assert_eq!(bi("7").checked_rem(&bi("0")), None);
    }

    #[test]
    fn test_to_primitive() {
        assert_eq!(bi("-9223372036854775808").to_i64(), Some(i64::MIN));
        assert_eq!(bi("-9223372036854775809").to_i64(), None);
        assert_eq!(bi("18446744073709551615").to_u64(), Some(u64::MAX));
        assert_eq!(bi("18446744073709551616").to_u64(), None);
        assert_eq!(bi("-1").to_u64(), None);
        assert_eq!(BigInteger::from(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(BigInteger::from(i128::MAX).to_i128(), Some(i128::MAX));
        assert_eq!(bi("42").to_usize(), Some(42));
    }

    #[test]
    fn test_from_primitive() {
        assert_eq!(BigInteger::from_i64(-5), Some(bi("-5")));
        assert_eq!(BigInteger::from_u64(5), Some(bi("5")));
        assert_eq!(BigInteger::from_f64(12.9), Some(bi("12")));
    }
}
