// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Rounding to the nearest tenth with integer arithmetic.

use crate::errors::ArithError;
use num_bigint::BigInt;
use num_integer::Integer;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounds `x / 10` to the nearest integer as `(x + 5) / 10`.
///
/// Division truncates toward zero. For non-negative `x` this is exactly
/// `floor(0.1 * x + 0.5)`, with halves rounding up. For negative `x` the result
/// may be one larger than the floor formula; see [`diverges_from_floor`].
///
/// The sum is formed in `i128`, so `i64::MAX` does not overflow.
///
/// # Examples
///
/// ```
/// use walkround_arith::round_div10;
///
/// assert_eq!(round_div10(14), 1);
/// assert_eq!(round_div10(15), 2);
/// assert_eq!(round_div10(-6), 0);
/// ```
pub fn round_div10(x: i64) -> i64 {
    ((x as i128 + 5) / 10) as i64
}

/// Rounds `x / divisor` to the nearest integer as `(x + divisor / 2) / divisor`.
///
/// This is the general form of [`round_div10`] and shares its truncating behavior
/// for negative `x`.
///
/// # Arguments
///
/// * `x` - The value to divide.
/// * `divisor` - A strictly positive divisor.
///
/// # Returns
///
/// The rounded quotient, or [`ArithError::InvalidDivisor`] if `divisor <= 0`.
pub fn round_div(x: i64, divisor: i64) -> Result<i64, ArithError> {
    if divisor <= 0 {
        return Err(ArithError::InvalidDivisor { divisor });
    }
    let divisor = divisor as i128;
    Ok(((x as i128 + divisor / 2) / divisor) as i64)
}

/// Computes `floor(0.1 * x + 0.5)` exactly, for every sign of `x`.
///
/// Equal to `floor((x + 5) / 10)` over the rationals.
pub fn floor_round_div10(x: i64) -> i64 {
    Integer::div_floor(&(x as i128 + 5), &10) as i64
}

/// Returns `true` when [`round_div10`] and [`floor_round_div10`] disagree on `x`.
///
/// This happens exactly when `x + 5` is negative and not a multiple of ten, i.e.
/// `x < -5` and `x` does not end in the digit 5. Both results then differ by one.
pub fn diverges_from_floor(x: i64) -> bool {
    round_div10(x) != floor_round_div10(x)
}

/// Big integer variant of [`round_div10`].
pub fn round_div10_big(x: &BigInt) -> BigInt {
    (x + BigInt::from(5)) / BigInt::from(10)
}

/// Big integer variant of [`floor_round_div10`].
pub fn floor_round_div10_big(x: &BigInt) -> BigInt {
    Integer::div_floor(&(x + BigInt::from(5)), &BigInt::from(10))
}

/// How negative entries are rounded.
///
/// Parsed the same way from the command line and from configuration: case-insensitive,
/// with `trunc` accepted for `truncate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", try_from = "String"))]
pub enum RoundingMode {
    /// `(x + 5) / 10` with truncating division.
    #[default]
    Truncate,
    /// `floor(0.1 * x + 0.5)`, computed exactly.
    Floor,
}

impl RoundingMode {
    pub fn round_div10(self, x: i64) -> i64 {
        match self {
            RoundingMode::Truncate => round_div10(x),
            RoundingMode::Floor => floor_round_div10(x),
        }
    }

    pub fn round_div10_big(self, x: &BigInt) -> BigInt {
        match self {
            RoundingMode::Truncate => round_div10_big(x),
            RoundingMode::Floor => floor_round_div10_big(x),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::Truncate => write!(f, "truncate"),
            RoundingMode::Floor => write!(f, "floor"),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" | "trunc" => Ok(RoundingMode::Truncate),
            "floor" => Ok(RoundingMode::Floor),
            other => Err(format!(
                "unknown rounding mode '{other}' (expected 'truncate' or 'floor')"
            )),
        }
    }
}

impl TryFrom<String> for RoundingMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
