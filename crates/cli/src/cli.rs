//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Solves linear and quadratic equations with real coefficients.
#[derive(Parser, Debug)]
#[command(name = "quadsolve")]
#[command(version)]
pub struct Cli {
    /// Log solver decisions (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands. Without one, `check` runs with its defaults.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the self-test table and report the first mismatch
    Check(CheckArgs),

    /// Solve a·x² + b·x + c = 0, reading coefficients from stdin if omitted
    Solve(SolveArgs),
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// TOML file of cases to run instead of the built-in table
    #[arg(long, value_name = "FILE")]
    pub cases: Option<PathBuf>,

    /// Also substitute each reported root back into its equation
    #[arg(long)]
    pub verify_roots: bool,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Coefficients a, b, and c
    #[arg(num_args = 3, value_names = ["A", "B", "C"], allow_negative_numbers = true)]
    pub coefficients: Vec<f64>,
}
