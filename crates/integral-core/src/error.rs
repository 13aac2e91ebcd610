//! Error types for integral-core
//!
//! Provides a unified error type for table construction, incremental
//! writes and statistical queries. Arithmetic on the `u64` accumulators
//! is not an error source: sums wrap on overflow.

use thiserror::Error;

/// Integral table error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Zero width or height at construction
    #[error("invalid table dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Two co-registered tables (or rows of one grid) disagree in shape
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Flat intensity buffer does not hold `width * height` values
    #[error("intensity data length mismatch: expected {expected}, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Incremental write outside the table's domain
    #[error("write at ({x}, {y}) is outside a {width}x{height} table")]
    OutOfRangeWrite {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Query region covers no pixels, so a mean is undefined
    #[error("degenerate query: {0}")]
    DegenerateQuery(String),

    /// `E[X^2] - E[X]^2` came out negative beyond rounding tolerance
    #[error("negative variance: {variance}")]
    NegativeVariance { variance: f64 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for integral table operations
pub type Result<T> = std::result::Result<T, Error>;
