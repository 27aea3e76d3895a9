//! Error handling for Inkstroke
//!
//! The path codec and simplifier are total functions and never fail;
//! these errors belong to the layers that accept user-supplied settings
//! (tolerances, stroke styles) and must reject nonsense up front.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Simplification tolerance is not a positive finite number
    #[error("Invalid tolerance {value}: must be a finite number greater than 0")]
    InvalidTolerance {
        /// The rejected tolerance.
        value: f64,
    },

    /// A stroke style attribute is unusable
    #[error("Invalid stroke style '{field}': {reason}")]
    InvalidStyle {
        /// The offending attribute.
        field: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Accept a tolerance only if it is finite and strictly positive.
pub fn validate_tolerance(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidTolerance { value })
    }
}
