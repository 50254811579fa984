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

use crate::integer::BigInteger;
use std::sync::LazyLock;

/// The shared constant `0`.
///
/// # Examples
///
/// ```rust
/// # use longmath_core::num::constants::ZERO;
/// assert!(ZERO.is_zero());
/// assert_eq!(ZERO.to_string(), "0");
/// ```
pub static ZERO: LazyLock<BigInteger> = LazyLock::new(|| BigInteger::from(0u8));

/// The shared constant `1`.
///
/// # Examples
///
/// ```rust
/// # use longmath_core::num::constants::ONE;
/// assert!(ONE.is_one());
/// ```
pub static ONE: LazyLock<BigInteger> = LazyLock::new(|| BigInteger::from(1u8));

/// The shared constant `10`.
///
/// # Examples
///
/// ```rust
/// # use longmath_core::num::constants::{ONE, TEN};
/// assert_eq!(TEN.to_string(), "10");
/// assert!(*ONE < *TEN);
/// ```
pub static TEN: LazyLock<BigInteger> = LazyLock::new(|| BigInteger::from(10u8));
