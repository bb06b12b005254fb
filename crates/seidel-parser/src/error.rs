//! Error types for input parsing.

use thiserror::Error;

/// Errors that can occur while turning user input into a linear system.
///
/// Positions are stored 0-based and displayed 1-based.
#[derive(Debug, Error)]
pub enum Error {
    /// A matrix cell is not a finite number.
    #[error("Invalid value in A[{},{}]: '{value}'", .row + 1, .col + 1)]
    InvalidCoefficient {
        row: usize,
        col: usize,
        value: String,
    },

    /// A right-hand side cell is not a finite number.
    #[error("Invalid value in b[{}]: '{value}'", .row + 1)]
    InvalidRhs { row: usize, value: String },

    /// Malformed line in a system file.
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// An equation line has no `|` separating the right-hand side.
    #[error("Missing '|' before the right-hand side at line {line}")]
    MissingRhs { line: usize },

    /// An equation line has the wrong number of coefficients.
    #[error("Line {line} has {actual} coefficients, expected {expected}")]
    RowLength {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// The input contains no equations.
    #[error("No equations found")]
    Empty,

    /// The parsed numbers do not form a valid system.
    #[error(transparent)]
    System(#[from] seidel_core::Error),

    /// The input file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, Error>;
