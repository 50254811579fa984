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

//! Operator trait implementations.
//!
//! Every binary operator is available for all four owned/borrowed operand
//! combinations. The compound assignment forms (`+=`, `-=`, ...) compute a
//! new value and rebind the left operand to it.
//!
//! `/` and `%` panic on a zero divisor, exactly like the primitive integer
//! types. Use `BigInteger::divide`, `BigInteger::modulus`, or
//! `num_traits::CheckedDiv` for the fallible forms. `<<` panics when the
//! shifted value cannot be allocated; `BigInteger::shift_left` reports that
//! as an error instead.

use super::BigInteger;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

#[inline]
fn divide_or_panic(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match a.divide(b) {
        Ok(quotient) => quotient,
        Err(e) => panic!("{}", e),
    }
}

#[inline]
fn modulus_or_panic(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match a.modulus(b) {
        Ok(remainder) => remainder,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! impl_binary_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $f:expr) => {
        impl $trait_name<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                ($f)(self, rhs)
            }
        }

        impl $trait_name<BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                ($f)(self, &rhs)
            }
        }

        impl $trait_name<&BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                ($f)(&self, rhs)
            }
        }

        impl $trait_name<BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                ($f)(&self, &rhs)
            }
        }

        impl $assign_trait<&BigInteger> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, rhs: &BigInteger) {
                *self = ($f)(&*self, rhs);
            }
        }

        impl $assign_trait<BigInteger> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, rhs: BigInteger) {
                *self = ($f)(&*self, &rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, BigInteger::add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, BigInteger::subtract);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, BigInteger::multiply);
impl_binary_op!(Div, div, DivAssign, div_assign, divide_or_panic);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, modulus_or_panic);

macro_rules! impl_shift_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $shift:ident) => {
        impl $trait_name<usize> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, places: usize) -> BigInteger {
                self.$shift(places)
            }
        }

        impl $trait_name<usize> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, places: usize) -> BigInteger {
                self.$shift(places)
            }
        }

        impl $assign_trait<usize> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, places: usize) {
                *self = self.$shift(places);
            }
        }
    };
}

impl_shift_op!(Shl, shl, ShlAssign, shl_assign, shift_left_by);
impl_shift_op!(Shr, shr, ShrAssign, shr_assign, shift_right_by);

impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::new(), |acc, v| BigInteger::add(&acc, &v))
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::new(), |acc, v| BigInteger::add(&acc, v))
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::from(1u8), |acc, v| acc.multiply(&v))
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::from(1u8), |acc, v| acc.multiply(v))
    }
}
