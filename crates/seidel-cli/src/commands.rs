//! Subcommand runners.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use seidel_core::{DominanceReport, LinearSystem};
use seidel_parser::parse_system_file;
use seidel_solver::{GaussSeidelConfig, GaussSeidelResult, solve_gauss_seidel};
use serde::Serialize;

use crate::output::{
    base_formulas, dominance_banner, explain_update, iteration_table, solution_summary,
};

/// Everything `--json` emits for a solve.
#[derive(Serialize)]
struct JsonReport<'a> {
    diagonally_dominant: bool,
    dominance: &'a DominanceReport,
    result: &'a GaussSeidelResult,
}

/// Load a system file, with the path in any error message.
pub fn load_system(path: &Path) -> Result<LinearSystem> {
    let system = parse_system_file(path)
        .with_context(|| format!("failed to load system from {}", path.display()))?;
    log::debug!("Loaded {0}x{0} system from {1}", system.dim(), path.display());
    Ok(system)
}

fn validated(config: GaussSeidelConfig) -> Result<GaussSeidelConfig> {
    config.validate()?;
    Ok(config)
}

/// Solve a system and print the full report.
pub fn run_solve(system: &LinearSystem, config: GaussSeidelConfig, json: bool) -> Result<()> {
    let config = validated(config)?;
    let dominance = system.dominance_report();
    let result = solve_gauss_seidel(system, &config);

    if json {
        let report = JsonReport {
            diagonally_dominant: dominance.is_dominant(),
            dominance: &dominance,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Gauss-Seidel Iteration");
    println!("======================");
    println!();
    println!("{}", dominance_banner(&dominance));
    println!();
    println!("Update formulas:");
    print!("{}", base_formulas(system));
    println!();
    print!("{}", iteration_table(&result));
    println!();
    print!("{}", solution_summary(&result));
    Ok(())
}

/// Print how one computed value was obtained.
///
/// `iteration` and `variable` are both 1-based, as shown in the table.
pub fn run_explain(
    system: &LinearSystem,
    config: GaussSeidelConfig,
    iteration: usize,
    variable: usize,
) -> Result<()> {
    let config = validated(config)?;
    if variable == 0 || variable > system.dim() {
        return Err(anyhow!(
            "variable must be between 1 and {}, got {}",
            system.dim(),
            variable
        ));
    }

    let result = solve_gauss_seidel(system, &config);
    let update = result.update(iteration, variable - 1).ok_or_else(|| {
        anyhow!(
            "iteration {} was not computed (solve ran {} iterations)",
            iteration,
            result.iterations
        )
    })?;

    print!("{}", explain_update(iteration, update));
    Ok(())
}

/// Print the dominance banner and the update formulas without solving.
pub fn run_formulas(system: &LinearSystem) -> Result<()> {
    println!("{}", dominance_banner(&system.dominance_report()));
    println!();
    print!("{}", base_formulas(system));
    Ok(())
}
