//! Core linear system representation for Seidel.
//!
//! This crate provides:
//! - [`LinearSystem`]: a validated square system A·x = b
//! - Diagonal dominance classification of the coefficient matrix
//! - The shared error type for invalid systems

pub mod dominance;
pub mod error;
pub mod system;

pub use dominance::{DominanceReport, RowDominance, dominance_report, is_diagonally_dominant};
pub use error::{Error, Result};
pub use system::{LinearSystem, textbook_example};
