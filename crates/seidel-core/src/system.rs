//! Validated square linear systems.

use nalgebra::{DMatrix, DVector};

use crate::dominance::{DominanceReport, dominance_report, is_diagonally_dominant};
use crate::error::{Error, Result};

/// A square linear system A·x = b.
///
/// Construction enforces everything the iterative update relies on: A is
/// n×n with n ≥ 1, b has length n, every entry is finite and every diagonal
/// coefficient is non-zero. The system is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl LinearSystem {
    /// Build a system from a coefficient matrix and right-hand side.
    pub fn new(a: DMatrix<f64>, b: DVector<f64>) -> Result<Self> {
        if a.nrows() == 0 {
            return Err(Error::EmptySystem);
        }
        if a.nrows() != a.ncols() {
            return Err(Error::NotSquare {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        if a.nrows() != b.len() {
            return Err(Error::DimensionMismatch {
                expected: a.nrows(),
                actual: b.len(),
            });
        }

        let n = a.nrows();
        for i in 0..n {
            for j in 0..n {
                if !a[(i, j)].is_finite() {
                    return Err(Error::NonFinite { row: i, col: Some(j) });
                }
            }
            if !b[i].is_finite() {
                return Err(Error::NonFinite { row: i, col: None });
            }
        }

        if let Some(row) = (0..n).find(|&i| a[(i, i)] == 0.0) {
            return Err(Error::ZeroDiagonal { row });
        }

        Ok(Self { a, b })
    }

    /// Build a system from row-major nested sequences.
    ///
    /// Ragged input (any row whose length differs from the number of rows)
    /// is reported as [`Error::NotSquare`].
    pub fn from_rows(rows: &[Vec<f64>], b: &[f64]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::EmptySystem);
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(Error::NotSquare {
                rows: n,
                cols: row.len(),
            });
        }

        let a = DMatrix::from_fn(n, n, |i, j| rows[i][j]);
        Self::new(a, DVector::from_column_slice(b))
    }

    /// Number of equations (and unknowns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// The coefficient matrix A.
    #[inline]
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// The right-hand side b.
    #[inline]
    pub fn rhs(&self) -> &DVector<f64> {
        &self.b
    }

    /// Coefficient A[i][j].
    #[inline]
    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        self.a[(i, j)]
    }

    /// Diagonal coefficient A[i][i].
    #[inline]
    pub fn diagonal(&self, i: usize) -> f64 {
        self.a[(i, i)]
    }

    /// Whether A is strictly diagonally dominant by rows.
    pub fn is_diagonally_dominant(&self) -> bool {
        is_diagonally_dominant(&self.a)
    }

    /// Per-row dominance breakdown of A.
    pub fn dominance_report(&self) -> DominanceReport {
        dominance_report(&self.a)
    }

    /// Residual b − A·x.
    pub fn residual(&self, x: &[f64]) -> Result<DVector<f64>> {
        if x.len() != self.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: x.len(),
            });
        }
        let x = DVector::from_column_slice(x);
        Ok(&self.b - &self.a * x)
    }

    /// Infinity norm of the residual b − A·x.
    pub fn residual_norm(&self, x: &[f64]) -> Result<f64> {
        Ok(self.residual(x)?.amax())
    }
}

/// The 3×3 sample system whose exact solution is x = [2, 3, -1].
///
/// ```text
///  2x1 +  x2 +  x3 =  6
///   x1 + 3x2 - 2x3 = 13
///   x1 - 2x2 - 3x3 = -1
/// ```
pub fn textbook_example() -> LinearSystem {
    let a = DMatrix::from_row_slice(3, 3, &[2.0, 1.0, 1.0, 1.0, 3.0, -2.0, 1.0, -2.0, -3.0]);
    let b = DVector::from_column_slice(&[6.0, 13.0, -1.0]);
    LinearSystem { a, b }
}
