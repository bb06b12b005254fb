//! Diagonal dominance classification.
//!
//! A matrix is strictly diagonally dominant by rows when, for every row i,
//! |A[i][i]| > Σ_{j≠i} |A[i][j]|. This is a sufficient condition for
//! Gauss-Seidel convergence, so the classification is advisory only: it never
//! changes how a system is solved.

use nalgebra::DMatrix;
use serde::Serialize;

/// Dominance breakdown for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowDominance {
    /// Row index (0-based).
    pub row: usize,
    /// |A[i][i]|.
    pub diagonal: f64,
    /// Σ_{j≠i} |A[i][j]|.
    pub off_diagonal_sum: f64,
}

impl RowDominance {
    /// Whether the diagonal strictly outweighs the rest of the row.
    #[inline]
    pub fn is_dominant(&self) -> bool {
        self.diagonal > self.off_diagonal_sum
    }
}

/// Row-by-row dominance breakdown of a matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominanceReport {
    pub rows: Vec<RowDominance>,
}

impl DominanceReport {
    /// True iff every row is strictly dominant.
    pub fn is_dominant(&self) -> bool {
        self.rows.iter().all(RowDominance::is_dominant)
    }

    /// Indices of the rows that break dominance.
    pub fn failing_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|r| !r.is_dominant())
            .map(|r| r.row)
            .collect()
    }
}

fn row_dominance(a: &DMatrix<f64>, i: usize) -> RowDominance {
    let off_diagonal_sum = (0..a.ncols())
        .filter(|&j| j != i)
        .map(|j| a[(i, j)].abs())
        .sum();
    RowDominance {
        row: i,
        diagonal: a[(i, i)].abs(),
        off_diagonal_sum,
    }
}

/// Check whether a square matrix is strictly diagonally dominant by rows.
///
/// Stops at the first failing row. Equality counts as failure.
pub fn is_diagonally_dominant(a: &DMatrix<f64>) -> bool {
    (0..a.nrows()).all(|i| row_dominance(a, i).is_dominant())
}

/// Compute the per-row dominance breakdown of a square matrix.
pub fn dominance_report(a: &DMatrix<f64>) -> DominanceReport {
    DominanceReport {
        rows: (0..a.nrows()).map(|i| row_dominance(a, i)).collect(),
    }
}
