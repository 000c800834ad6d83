use quadsolve_core::{Coefficients, Observer, format_solution};
use quadsolve_solvers::{solve_quadratic, verify_roots};
use tracing::{debug, info, warn};

use crate::{Case, CaseSource, Config, Error, Mismatch, builtin_cases, file::load_cases};

/// Message reported when every case passes.
pub const SUCCESS_MESSAGE: &str = "Everything is fine!";

/// Control actions supported by the self-test runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current case.
    StopEarly,
}

/// Per-case event emitted by the self-test runner.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The case produced the expected sentence.
    Passed { index: usize, case: &'a Case },
    /// The case produced a different sentence; the run ends after this event.
    Failed {
        index: usize,
        case: &'a Case,
        actual: &'a str,
    },
}

/// Indicates whether every case ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every case ran and passed.
    Completed,
    /// An observer stopped the run before the last case.
    StoppedByObserver,
}

/// Summary of a run that found no mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    /// Number of cases that ran and passed.
    pub passed: usize,
}

impl Report {
    /// Returns the message printed for this report.
    ///
    /// Only a completed run reports [`SUCCESS_MESSAGE`].
    #[must_use]
    pub fn message(&self) -> String {
        match self.status {
            Status::Completed => SUCCESS_MESSAGE.to_owned(),
            Status::StoppedByObserver => {
                format!("Stopped early after {} passing cases.", self.passed)
            }
        }
    }
}

/// Runs `cases` in order, stopping at the first mismatch.
///
/// # Errors
///
/// Returns [`Error::Mismatch`] for the first case whose sentence differs,
/// [`Error::Solve`] if a case cannot be solved, and [`Error::Verify`] if
/// `verify` is set and a reported root does not satisfy its equation.
pub fn run<Obs>(cases: &[Case], verify: bool, mut observer: Obs) -> Result<Report, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    for (index, case) in cases.iter().enumerate() {
        let coefficients = case.coefficients;
        let Coefficients { a, b, c } = coefficients;

        let set = solve_quadratic(a, b, c).map_err(|source| Error::Solve {
            index,
            coefficients,
            source,
        })?;

        if verify {
            verify_roots(&coefficients, &set).map_err(|source| Error::Verify {
                index,
                coefficients,
                source,
            })?;
        }

        let actual = format_solution(&set);
        if actual != case.expected {
            warn!(index, %coefficients, expected = %case.expected, %actual, "case failed");
            observer.observe(&Event::Failed {
                index,
                case,
                actual: &actual,
            });
            return Err(Error::Mismatch(Mismatch {
                index,
                coefficients,
                expected: case.expected.clone(),
                actual,
            }));
        }

        debug!(index, %coefficients, "case passed");
        if let Some(Action::StopEarly) = observer.observe(&Event::Passed { index, case }) {
            info!(passed = index + 1, "run stopped by observer");
            return Ok(Report {
                status: Status::StoppedByObserver,
                passed: index + 1,
            });
        }
    }

    info!(passed = cases.len(), "all cases passed");
    Ok(Report {
        status: Status::Completed,
        passed: cases.len(),
    })
}

/// Runs `cases` without observation.
///
/// # Errors
///
/// See [`run`].
pub fn run_unobserved(cases: &[Case], verify: bool) -> Result<Report, Error> {
    run(cases, verify, ())
}

/// Loads the cases named by `config` and runs them.
///
/// # Errors
///
/// Returns an error if the case file cannot be loaded, or as [`run`] does.
pub fn self_test(config: &Config) -> Result<Report, Error> {
    let cases = match config.source() {
        CaseSource::Builtin => builtin_cases(),
        CaseSource::File(path) => load_cases(path)?,
    };
    run_unobserved(&cases, config.verify_roots())
}
