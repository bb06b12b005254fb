//! Result types for Gauss-Seidel solves.

use serde::Serialize;

use super::trace::VariableUpdate;

/// Everything computed in one sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationRecord {
    /// Sweep number (1-based).
    pub iteration: usize,
    /// One update per unknown, in row order.
    pub updates: Vec<VariableUpdate>,
    /// max_i |x_i − x_i_prev| for this sweep.
    pub error: f64,
}

impl IterationRecord {
    /// The unknowns as they stood at the end of this sweep.
    pub fn values(&self) -> Vec<f64> {
        self.updates.iter().map(|u| u.value).collect()
    }
}

/// How a solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The step change fell to or below the tolerance.
    Converged,
    /// The sweep budget ran out first.
    Exhausted,
}

/// Result of a Gauss-Seidel solve.
///
/// A non-converged result is still a complete result: `solution` holds the
/// last approximation and `history` every sweep that ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaussSeidelResult {
    /// Final approximation.
    pub solution: Vec<f64>,
    /// Whether the tolerance was met.
    pub converged: bool,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// One record per sweep.
    pub history: Vec<IterationRecord>,
    /// Which terminal state the solve reached.
    pub outcome: Outcome,
}

impl GaussSeidelResult {
    /// Step change of the last sweep, if any sweep ran.
    pub fn final_error(&self) -> Option<f64> {
        self.history.last().map(|r| r.error)
    }

    /// Step change of every sweep, in order.
    pub fn error_history(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.error).collect()
    }

    /// Look up the update of one unknown in one sweep.
    ///
    /// `iteration` is 1-based as recorded; `variable` is 0-based.
    pub fn update(&self, iteration: usize, variable: usize) -> Option<&VariableUpdate> {
        let record = self.history.get(iteration.checked_sub(1)?)?;
        record.updates.get(variable)
    }
}
