//! Error types for linear system construction.

use thiserror::Error;

/// Errors raised when a linear system fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The system has no equations.
    #[error("System must have at least one equation")]
    EmptySystem,

    /// The coefficient matrix is not square.
    #[error("Coefficient matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// The right-hand side length does not match the matrix size.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An entry is NaN or infinite.
    #[error("Non-finite value in {}", entry_label(.row, .col))]
    NonFinite { row: usize, col: Option<usize> },

    /// A diagonal coefficient is zero, so the update for that row would divide by zero.
    #[error("Zero on the diagonal in row {}", .row + 1)]
    ZeroDiagonal { row: usize },
}

fn entry_label(row: &usize, col: &Option<usize>) -> String {
    match col {
        Some(c) => format!("A[{},{}]", row + 1, c + 1),
        None => format!("b[{}]", row + 1),
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
