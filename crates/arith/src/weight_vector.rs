// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer weight vectors adjusted in place by the rounding step.

use crate::errors::ArithError;
use crate::rounding::{diverges_from_floor, RoundingMode};
use crate::sqrt::sqrt_ceil_like_u128;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A weight vector of signed integer entries.
///
/// Walk steps perturb these weights and shrink them by a factor of ten whenever the
/// entries grow too large to combine safely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightVector {
    entries: Vec<i64>,
}

impl WeightVector {
    pub fn new(entries: Vec<i64>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[i64] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.entries
    }

    /// Replaces every entry `x` with `round(x / 10)` in place.
    ///
    /// # Arguments
    ///
    /// * `mode` - How negative entries are rounded. Under [`RoundingMode::Truncate`]
    ///   entries below `-5` may land one above the floor result; each such entry is
    ///   reported at trace level.
    pub fn shrink_by_ten(&mut self, mode: RoundingMode) {
        debug!(entries = self.entries.len(), %mode, "Shrinking weight vector");
        for entry in self.entries.iter_mut() {
            if mode == RoundingMode::Truncate && diverges_from_floor(*entry) {
                trace!(entry = *entry, "Truncating division diverges from floor rounding");
            }
            *entry = mode.round_div10(*entry);
        }
    }

    /// Largest entry magnitude.
    pub fn max_abs(&self) -> u64 {
        self.entries
            .iter()
            .map(|x| x.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Shrinks by ten until no entry magnitude exceeds `limit`.
    ///
    /// Every non-zero entry strictly decreases in magnitude on each pass, so this
    /// terminates for any `limit`, including zero.
    ///
    /// # Returns
    ///
    /// The number of passes applied.
    pub fn shrink_until(&mut self, limit: u64, mode: RoundingMode) -> usize {
        let mut passes = 0;
        while self.max_abs() > limit {
            self.shrink_by_ten(mode);
            passes += 1;
        }
        debug!(passes, limit, "Weight vector within limit");
        passes
    }

    /// Sum of squared entries.
    ///
    /// # Returns
    ///
    /// The squared Euclidean norm, or [`ArithError::Overflow`] if it exceeds `u128`.
    pub fn squared_norm(&self) -> Result<u128, ArithError> {
        self.entries.iter().try_fold(0u128, |acc, x| {
            let magnitude = x.unsigned_abs() as u128;
            acc.checked_add(magnitude * magnitude)
                .ok_or_else(|| ArithError::Overflow {
                    message: format!("squared norm of {self} exceeds u128"),
                })
        })
    }

    /// Computes `1 + trunc(sqrt(|w|^2))`, the radius used to bound perturbations.
    pub fn perturbation_bound(&self) -> Result<u64, ArithError> {
        let bound = sqrt_ceil_like_u128(self.squared_norm()?);
        u64::try_from(bound).map_err(|_| ArithError::Overflow {
            message: format!("perturbation bound {bound} does not fit in u64"),
        })
    }
}

impl From<Vec<i64>> for WeightVector {
    fn from(entries: Vec<i64>) -> Self {
        Self::new(entries)
    }
}

impl AsRef<[i64]> for WeightVector {
    fn as_ref(&self) -> &[i64] {
        &self.entries
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, ")")
    }
}

/// Parses entries separated by commas and/or whitespace, optionally wrapped in parentheses.
impl FromStr for WeightVector {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let entries = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty())
            .map(str::parse::<i64>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(entries))
    }
}
