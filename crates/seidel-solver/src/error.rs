//! Error types for the solver crate.

use thiserror::Error;

/// Errors that can occur before a solve starts.
///
/// Once a sweep begins the solver cannot fail; non-convergence is reported
/// through [`crate::Outcome::Exhausted`], not as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The system failed validation.
    #[error("Invalid system: {0}")]
    System(#[from] seidel_core::Error),

    /// The solver configuration is unusable.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, Error>;
