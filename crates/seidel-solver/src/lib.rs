//! Iterative solvers for Seidel.
//!
//! The Gauss-Seidel solver records, for every sweep and every unknown, the
//! formula used to compute it: the right-hand side, the diagonal, and each
//! off-diagonal term together with the value of the unknown it consumed and
//! whether that value was already updated in the current sweep.
//!
//! # Usage
//!
//! ```
//! use seidel_solver::{GaussSeidelConfig, solve_gauss_seidel};
//! use seidel_core::textbook_example;
//!
//! let system = textbook_example();
//! let result = solve_gauss_seidel(&system, &GaussSeidelConfig::default());
//! assert!(result.converged);
//! assert!((result.solution[0] - 2.0).abs() < 1e-3);
//! ```

pub mod error;
pub mod gauss_seidel;

pub use error::{Error, Result};
pub use gauss_seidel::{
    Freshness, FormulaTrace, GaussSeidelConfig, GaussSeidelResult, IterationRecord, Outcome,
    TermContribution, VariableUpdate, solve, solve_gauss_seidel,
};
pub use seidel_core::{LinearSystem, is_diagonally_dominant};
