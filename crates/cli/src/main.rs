//! Entry point for the `quadsolve` binary.
//!
//! Without a subcommand the binary runs the self-test table and prints
//! either `Everything is fine!` or the first mismatch, exiting non-zero on
//! failure. `quadsolve solve` solves a single equation.

mod check;
mod cli;
mod input;
mod logging;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use quadsolve_core::{Coefficients, format_solution};
use quadsolve_harness::{CaseSource, Config, self_test};
use quadsolve_solvers::{solve_quadratic, verify_roots};
use tracing::{debug, instrument, warn};

use crate::cli::{CheckArgs, Cli, Command, SolveArgs};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        None => handle_check(CheckArgs::default()),
        Some(Command::Check(args)) => handle_check(args),
        Some(Command::Solve(args)) => handle_solve(args),
    }
}

/// Runs the self-test and prints its message.
#[instrument(skip_all)]
fn handle_check(args: CheckArgs) -> Result<ExitCode> {
    let source = args.cases.map_or(CaseSource::Builtin, CaseSource::File);
    let config = Config::new(source, args.verify_roots)?;

    let outcome = check::outcome(self_test(&config)).context("self-test could not run")?;
    println!("{}", outcome.message);
    Ok(outcome.code)
}

/// Solves one equation and prints the sentence.
#[instrument(skip_all)]
fn handle_solve(args: SolveArgs) -> Result<ExitCode> {
    let coefficients = match args.coefficients[..] {
        [a, b, c] => Coefficients::from([a, b, c]),
        _ => prompt_coefficients()?,
    };

    let Coefficients { a, b, c } = coefficients;
    let set = solve_quadratic(a, b, c)
        .with_context(|| format!("cannot solve with {coefficients} coefficients"))?;

    match verify_roots(&coefficients, &set) {
        Ok(residuals) => debug!(?residuals, "residuals at reported roots"),
        Err(err) => warn!(%err, "reported roots failed verification"),
    }

    println!("{}", format_solution(&set));
    Ok(ExitCode::SUCCESS)
}

/// Asks for coefficients on stdout and reads them from stdin.
fn prompt_coefficients() -> Result<Coefficients> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Enter the equation coefficients:")?;
    stdout.flush()?;

    let coefficients =
        input::read_coefficients(io::stdin().lock()).context("failed to read coefficients")?;
    Ok(coefficients)
}
