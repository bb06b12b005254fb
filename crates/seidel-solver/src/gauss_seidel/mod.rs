//! Gauss-Seidel iterative solver with per-sweep formula traces.
//!
//! # Module Structure
//!
//! - [`solver`] - The sweep loop and the validated entry point
//! - [`trace`] - Per-unknown formula traces
//! - [`result`] - Iteration records and the solve outcome

pub mod result;
pub mod solver;
pub mod trace;

pub use result::{GaussSeidelResult, IterationRecord, Outcome};
pub use solver::{solve, solve_gauss_seidel};
pub use trace::{FormulaTrace, Freshness, TermContribution, VariableUpdate};

use crate::error::{Error, Result};

/// Gauss-Seidel solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussSeidelConfig {
    /// Stop once the infinity norm of the step change is at or below this.
    pub tol: f64,
    /// Maximum number of sweeps.
    pub max_iter: usize,
}

impl Default for GaussSeidelConfig {
    fn default() -> Self {
        Self {
            tol: 1e-4,
            max_iter: 100,
        }
    }
}

impl GaussSeidelConfig {
    /// Create a configuration with the given tolerance and sweep budget.
    pub fn new(tol: f64, max_iter: usize) -> Self {
        Self { tol, max_iter }
    }

    /// Check that the configuration can drive a solve.
    ///
    /// A zero tolerance is allowed; it simply means the solve runs until the
    /// step change is exactly zero or the budget is spent.
    pub fn validate(&self) -> Result<()> {
        if self.tol.is_nan() || self.tol < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be non-negative, got {}",
                self.tol
            )));
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidConfig(
                "maximum iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
