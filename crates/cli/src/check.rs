//! Turning a self-test run into printed text and an exit status.

use std::process::ExitCode;

use quadsolve_harness::{Error, Report};

/// What `quadsolve check` prints and how it exits.
#[derive(Debug)]
pub struct Outcome {
    pub message: String,
    pub code: ExitCode,
}

/// Maps a run result to its outcome.
///
/// A mismatch is an expected way for a run to end: its diagnostic is printed
/// and the process exits with status 1.
///
/// # Errors
///
/// Returns any error other than a mismatch, since the run never got to
/// compare sentences.
pub fn outcome(result: Result<Report, Error>) -> Result<Outcome, Error> {
    match result {
        Ok(report) => Ok(Outcome {
            message: report.message(),
            code: ExitCode::SUCCESS,
        }),
        Err(Error::Mismatch(mismatch)) => Ok(Outcome {
            message: mismatch.to_string(),
            code: ExitCode::FAILURE,
        }),
        Err(err) => Err(err),
    }
}
