//! Text rendering of dominance banners, formulas, iteration tables and traces.
//!
//! Everything here returns a `String` so the commands decide where it goes.

use seidel_core::{DominanceReport, LinearSystem};
use seidel_solver::{FormulaTrace, GaussSeidelResult, IterationRecord, VariableUpdate};

const VALUE_WIDTH: usize = 14;

/// Advisory line describing the dominance classification.
pub fn dominance_banner(report: &DominanceReport) -> String {
    if report.is_dominant() {
        "Matrix is diagonally dominant. Convergence guaranteed.".to_string()
    } else {
        let rows: Vec<String> = report
            .failing_rows()
            .iter()
            .map(|r| (r + 1).to_string())
            .collect();
        format!(
            "Warning: matrix is not diagonally dominant (rows {}). It may not converge.",
            rows.join(", ")
        )
    }
}

fn base_formula(system: &LinearSystem, i: usize) -> String {
    let terms: String = (0..system.dim())
        .filter(|&j| j != i)
        .map(|j| format!(" - ({})x{}", system.coefficient(i, j), j + 1))
        .collect();
    format!(
        "x{} = ( {}{} ) / {}\n",
        i + 1,
        system.rhs()[i],
        terms,
        system.diagonal(i)
    )
}

/// One line per unknown: `x1 = ( b1 - (a12)x2 - ... ) / a11`.
pub fn base_formulas(system: &LinearSystem) -> String {
    (0..system.dim()).map(|i| base_formula(system, i)).collect()
}

/// Sign shown in front of a term of `b − Σ`: positive coefficients are
/// subtracted, negative ones added back.
#[inline]
pub fn display_sign(coefficient: f64) -> char {
    if coefficient >= 0.0 { '-' } else { '+' }
}

fn table_row(record: &IterationRecord) -> String {
    let values: String = record
        .updates
        .iter()
        .map(|u| format!(" {:>width$.6}", u.value, width = VALUE_WIDTH))
        .collect();
    format!("{:>5} |{} | {:.8}", record.iteration, values, record.error)
}

/// Iteration table: one row per sweep, values to 6 decimals, error to 8.
pub fn iteration_table(result: &GaussSeidelResult) -> String {
    let columns: String = (1..=result.solution.len())
        .map(|i| format!(" {:>width$}", format!("x{}", i), width = VALUE_WIDTH))
        .collect();
    let header = format!("{:>5} |{} | Error", "Iter", columns);

    let mut out = format!("{}\n{}\n", header, "-".repeat(header.chars().count()));
    for record in &result.history {
        out.push_str(&table_row(record));
        out.push('\n');
    }
    out
}

/// Closing status line plus, when converged, the solution.
pub fn solution_summary(result: &GaussSeidelResult) -> String {
    if !result.converged {
        return format!(
            "Did not converge within {} iterations (last step change: {:.2e}).\n",
            result.iterations,
            result.final_error().unwrap_or(f64::NAN)
        );
    }

    let mut out = format!("Converged in {} iterations.\n\nSolution:\n", result.iterations);
    for (i, v) in result.solution.iter().enumerate() {
        out.push_str(&format!("  x{} = {:.6}\n", i + 1, v));
    }
    out
}

fn formula_terms(formula: &FormulaTrace) -> String {
    formula
        .contributions
        .iter()
        .map(|term| {
            let tag = if term.is_new { "NEW" } else { "OLD" };
            format!(
                "  {} ({} × {:.6})  ← x{} {}\n",
                display_sign(term.coefficient),
                term.coefficient.abs(),
                term.value_used,
                term.column + 1,
                tag
            )
        })
        .collect()
}

/// Step-by-step explanation of how one value was computed.
pub fn explain_update(iteration: usize, update: &VariableUpdate) -> String {
    let idx = update.index + 1;
    let formula = &update.formula;

    let mut out = format!("x{} (iteration {})\n", idx, iteration);
    out.push_str(&format!("  {}    (independent term b{})\n", formula.rhs, idx));
    out.push_str(&formula_terms(formula));
    out.push_str(&format!("  ÷ {}    (diagonal a{}{})\n", formula.diagonal, idx, idx));
    out.push_str(&format!("  = {:.6}\n", update.value));
    out
}
