//! Error types for walk arithmetic.

use thiserror::Error;

/// Errors that can occur during rounding and bound computations.
#[derive(Debug, Error, PartialEq)]
pub enum ArithError {
    /// Divisor must be strictly positive
    #[error("Invalid divisor: {divisor} (must be positive)")]
    InvalidDivisor { divisor: i64 },

    /// Square root of a negative value
    #[error("Domain error: square root of negative value {value}")]
    NegativeSqrt { value: String },

    /// NaN or infinite floating-point input
    #[error("Domain error: value {value} is not finite")]
    NotFinite { value: f64 },

    /// Arithmetic overflow
    #[error("Arithmetic error: {message}")]
    Overflow { message: String },

    /// Parse error for a weight vector entry
    #[error("Parse error: {0}")]
    Parse(#[from] std::num::ParseIntError),
}
