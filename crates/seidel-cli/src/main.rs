//! seidel CLI tool.
//!
//! Solves a square linear system with Gauss-Seidel iteration and shows how
//! every value in every sweep was computed.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use seidel_core::textbook_example;
use seidel_solver::GaussSeidelConfig;

use crate::commands::{load_system, run_explain, run_formulas, run_solve};

#[derive(Parser)]
#[command(name = "seidel")]
#[command(about = "Traced Gauss-Seidel solver for square linear systems")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct SolveOptions {
    /// Stop when the largest change in a sweep is at or below this
    #[arg(long, default_value = "1e-4")]
    tol: f64,

    /// Maximum number of sweeps
    #[arg(long, default_value = "100")]
    max_iter: usize,
}

impl From<SolveOptions> for GaussSeidelConfig {
    fn from(opts: SolveOptions) -> Self {
        GaussSeidelConfig::new(opts.tol, opts.max_iter)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the system in a file (one `a1 a2 ... | b` equation per line)
    Solve {
        /// Path to the system file
        file: PathBuf,

        #[command(flatten)]
        options: SolveOptions,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Solve the built-in 3x3 example system
    Example {
        #[command(flatten)]
        options: SolveOptions,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how one value in the iteration table was computed
    Explain {
        /// Path to the system file
        file: PathBuf,

        /// Iteration number (1-based)
        #[arg(short, long)]
        iteration: usize,

        /// Variable number (1-based, x1 = 1)
        #[arg(short, long)]
        variable: usize,

        #[command(flatten)]
        options: SolveOptions,
    },

    /// Print the update formula of every unknown
    Formulas {
        /// Path to the system file
        file: PathBuf,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Solve {
            file,
            options,
            json,
        } => {
            let system = load_system(&file)?;
            run_solve(&system, options.into(), json)
        }
        Commands::Example { options, json } => {
            run_solve(&textbook_example(), options.into(), json)
        }
        Commands::Explain {
            file,
            iteration,
            variable,
            options,
        } => {
            let system = load_system(&file)?;
            run_explain(&system, options.into(), iteration, variable)
        }
        Commands::Formulas { file } => {
            let system = load_system(&file)?;
            run_formulas(&system)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn solve_options_defaults() {
        let cli = Cli::parse_from(["seidel", "example"]);
        match cli.command {
            Commands::Example { options, json } => {
                let config: GaussSeidelConfig = options.into();
                assert_eq!(config, GaussSeidelConfig::default());
                assert!(!json);
            }
            _ => panic!("expected example command"),
        }
    }

    #[test]
    fn explain_arguments() {
        let cli = Cli::parse_from([
            "seidel", "explain", "sys.txt", "-i", "3", "-v", "2", "--max-iter", "10",
        ]);
        match cli.command {
            Commands::Explain {
                file,
                iteration,
                variable,
                options,
            } => {
                assert_eq!(file, PathBuf::from("sys.txt"));
                assert_eq!(iteration, 3);
                assert_eq!(variable, 2);
                assert_eq!(options.max_iter, 10);
            }
            _ => panic!("expected explain command"),
        }
    }
}
