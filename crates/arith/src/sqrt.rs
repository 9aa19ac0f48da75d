// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Square-root bounds of the form `1 + trunc(sqrt(n))`.
//!
//! For `n >= 0` the root is non-negative, so truncation and `floor` agree. Negative
//! arguments are rejected with [`ArithError::NegativeSqrt`] rather than clamped.

use crate::errors::ArithError;
use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{One, Signed};

/// Computes `1 + trunc(sqrt(n))` with an exact integer root.
///
/// # Arguments
///
/// * `n` - A non-negative integer.
///
/// # Returns
///
/// The bound, or [`ArithError::NegativeSqrt`] if `n < 0`.
///
/// # Examples
///
/// ```
/// use walkround_arith::sqrt_ceil_like;
///
/// assert_eq!(sqrt_ceil_like(3), Ok(2));
/// assert_eq!(sqrt_ceil_like(4), Ok(3));
/// assert!(sqrt_ceil_like(-1).is_err());
/// ```
pub fn sqrt_ceil_like(n: i64) -> Result<u64, ArithError> {
    if n < 0 {
        return Err(ArithError::NegativeSqrt {
            value: n.to_string(),
        });
    }
    Ok(1 + Roots::sqrt(&(n as u64)))
}

/// Computes `1 + trunc(sqrt(n))` for a floating-point `n` using a truncating cast.
///
/// Results are only as exact as `f64::sqrt`; past `2^52` prefer [`sqrt_ceil_like`].
pub fn sqrt_ceil_like_f64(n: f64) -> Result<u64, ArithError> {
    if !n.is_finite() {
        return Err(ArithError::NotFinite { value: n });
    }
    if n < 0.0 {
        return Err(ArithError::NegativeSqrt {
            value: n.to_string(),
        });
    }
    (n.sqrt() as u64)
        .checked_add(1)
        .ok_or_else(|| ArithError::Overflow {
            message: format!("square-root bound of {n} does not fit in u64"),
        })
}

/// Big integer variant of [`sqrt_ceil_like`].
pub fn sqrt_ceil_like_big(n: &BigInt) -> Result<BigInt, ArithError> {
    if n.is_negative() {
        return Err(ArithError::NegativeSqrt {
            value: n.to_string(),
        });
    }
    Ok(Roots::sqrt(n) + BigInt::one())
}

/// Computes `1 + trunc(sqrt(n))` for an unsigned 128-bit `n`.
pub(crate) fn sqrt_ceil_like_u128(n: u128) -> u128 {
    1 + Roots::sqrt(&n)
}
