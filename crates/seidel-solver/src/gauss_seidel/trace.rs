//! Formula traces explaining each computed value.

use serde::Serialize;

/// Whether a value consumed by an update came from the current sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Freshness {
    /// Already updated earlier in this sweep (column < row).
    Fresh,
    /// Still holding the previous sweep's value (column > row).
    Stale,
}

/// One off-diagonal term A[i][j]·x[j] of a row update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermContribution {
    /// Raw coefficient A[i][j], sign untouched.
    pub coefficient: f64,
    /// Column index j (0-based).
    pub column: usize,
    /// Value of x[j] at the moment row i was updated.
    pub value_used: f64,
    /// True when x[j] had already been updated in the current sweep.
    pub is_new: bool,
}

impl TermContribution {
    /// coefficient × value_used.
    #[inline]
    pub fn product(&self) -> f64 {
        self.coefficient * self.value_used
    }

    /// [`Freshness::Fresh`] when `is_new`, otherwise [`Freshness::Stale`].
    #[inline]
    pub fn freshness(&self) -> Freshness {
        if self.is_new {
            Freshness::Fresh
        } else {
            Freshness::Stale
        }
    }
}

/// The inputs of x[i] = (b[i] − Σ A[i][j]·x[j]) / A[i][i].
///
/// A 1×1 system has no off-diagonal terms; `contributions` is then empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaTrace {
    /// Independent term b[i].
    pub rhs: f64,
    /// Diagonal coefficient A[i][i].
    pub diagonal: f64,
    /// Off-diagonal terms in ascending column order.
    pub contributions: Vec<TermContribution>,
}

impl FormulaTrace {
    /// Σ coefficient × value_used, summed in column order.
    pub fn sum(&self) -> f64 {
        self.contributions.iter().map(TermContribution::product).sum()
    }

    /// Recompute the value this formula produced.
    pub fn reconstruct(&self) -> f64 {
        (self.rhs - self.sum()) / self.diagonal
    }

    /// Number of terms that used values from the current sweep.
    pub fn fresh_count(&self) -> usize {
        self.contributions.iter().filter(|c| c.is_new).count()
    }
}

/// The value computed for one unknown in one sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableUpdate {
    /// Unknown index i (0-based).
    pub index: usize,
    /// Computed x[i].
    pub value: f64,
    /// How `value` was computed.
    pub formula: FormulaTrace,
}
