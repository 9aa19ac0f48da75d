// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Walk Arithmetic
//!
//! Exact integer replacements for the floating-point rounding idioms used when a
//! Gröbner walk adjusts its integer weight vectors.
//!
//! ## Features
//!
//! - Decimal rounding: `round(x / 10)` as `(x + 5) / 10`, with no floating point.
//! - Square-root bounds: `1 + trunc(sqrt(n))` via an exact integer root.
//! - Weight vectors: in-place shrinking and perturbation bounds.
//! - Big integers: `num-bigint` variants for coefficients that outgrow `i64`.
//!
//! ## Negative inputs
//!
//! Truncating division rounds toward zero, so `(x + 5) / 10` and `floor(0.1 * x + 0.5)`
//! disagree for some negative `x`. The truncating form is the default. [`RoundingMode::Floor`]
//! reproduces the floor formula exactly, and [`diverges_from_floor`] tells the two apart.

pub mod errors;
pub mod rounding;
pub mod sqrt;
pub mod weight_vector;

pub use errors::ArithError;
pub use rounding::*;
pub use sqrt::*;
pub use weight_vector::WeightVector;
