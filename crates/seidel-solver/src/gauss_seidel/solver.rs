//! The Gauss-Seidel sweep loop.

use nalgebra::{DMatrix, DVector};
use seidel_core::LinearSystem;

use super::GaussSeidelConfig;
use super::result::{GaussSeidelResult, IterationRecord, Outcome};
use super::trace::{FormulaTrace, TermContribution, VariableUpdate};
use crate::error::Result;

/// Solve A·x = b with Gauss-Seidel iteration, starting from x = 0.
///
/// Rows are updated in ascending order and each new value is written back
/// immediately, so row i sees this sweep's values for columns j < i and the
/// previous sweep's values for j > i. After every sweep the infinity norm of
/// the step change is compared against `config.tol`.
///
/// The system is taken as-is: no pivoting or reordering is applied, and a
/// matrix that is not diagonally dominant may diverge. Divergence shows up as
/// [`Outcome::Exhausted`] with the full history attached.
pub fn solve_gauss_seidel(system: &LinearSystem, config: &GaussSeidelConfig) -> GaussSeidelResult {
    let n = system.dim();
    let a = system.matrix();
    let b = system.rhs();

    let mut x = vec![0.0; n];
    let mut history = Vec::with_capacity(config.max_iter.min(1024));

    for k in 1..=config.max_iter {
        let x_old = x.clone();
        let mut updates = Vec::with_capacity(n);

        for i in 0..n {
            let mut sum = 0.0;
            let mut contributions = Vec::with_capacity(n - 1);

            for j in (0..n).filter(|&j| j != i) {
                let term = TermContribution {
                    coefficient: a[(i, j)],
                    column: j,
                    value_used: x[j],
                    is_new: j < i,
                };
                sum += term.product();
                contributions.push(term);
            }

            let diagonal = a[(i, i)];
            let new_val = (b[i] - sum) / diagonal;
            x[i] = new_val;

            updates.push(VariableUpdate {
                index: i,
                value: new_val,
                formula: FormulaTrace {
                    rhs: b[i],
                    diagonal,
                    contributions,
                },
            });
        }

        let error = step_change(&x, &x_old);

        log::debug!("Gauss-Seidel sweep {}: step change {:.3e}", k, error);

        history.push(IterationRecord {
            iteration: k,
            updates,
            error,
        });

        if error <= config.tol {
            log::info!("Gauss-Seidel converged after {} sweeps", k);
            return GaussSeidelResult {
                solution: x,
                converged: true,
                iterations: k,
                history,
                outcome: Outcome::Converged,
            };
        }
    }

    log::warn!(
        "Gauss-Seidel did not converge after {} iterations (step change: {:.2e})",
        config.max_iter,
        history.last().map_or(f64::NAN, |r| r.error)
    );

    GaussSeidelResult {
        solution: x,
        converged: false,
        iterations: config.max_iter,
        history,
        outcome: Outcome::Exhausted,
    }
}

/// Infinity norm of `x - x_old`.
///
/// NaN propagates: once the iterates overflow, `inf - inf` makes the norm NaN
/// and `NaN <= tol` never holds, so an overflowed solve cannot converge.
pub(crate) fn step_change(x: &[f64], x_old: &[f64]) -> f64 {
    x.iter()
        .zip(x_old.iter())
        .map(|(&xi, &xo)| (xi - xo).abs())
        .fold(0.0, |acc, d| if d.is_nan() || d > acc { d } else { acc })
}

/// Validate the inputs, then run [`solve_gauss_seidel`].
///
/// Fails fast on a non-square or empty matrix, a right-hand side of the wrong
/// length, non-finite entries, a zero diagonal, a negative tolerance or a
/// zero sweep budget.
pub fn solve(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    tol: f64,
    max_iter: usize,
) -> Result<GaussSeidelResult> {
    let config = GaussSeidelConfig::new(tol, max_iter);
    config.validate()?;
    let system = LinearSystem::new(a.clone(), b.clone())?;
    Ok(solve_gauss_seidel(&system, &config))
}
