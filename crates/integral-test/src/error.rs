//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test data
#[derive(Debug, Error)]
pub enum TestError {
    /// Grid generator parameters out of range
    #[error("invalid grid parameters: {0}")]
    InvalidGrid(String),

    /// Building a table from test data failed
    #[error("table error: {0}")]
    Table(#[from] integral_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
