//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `GsError` as one variant
//! via `#[from]`, so validation failures keep their original shape all the
//! way up to the binary.

use thiserror::Error;

/// The top-level error type for `gs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GsError {
    /// Inverted bounds or a non-positive count.
    #[error("configuration error: {0}")]
    ConfigValidation(String),

    /// A dispatch target set with no server able to take the car.
    #[error("no eligible server: {0}")]
    NoEligibleServer(String),

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: u64, max: u64 },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `gs-*` crates.
pub type GsResult<T> = Result<T, GsError>;
