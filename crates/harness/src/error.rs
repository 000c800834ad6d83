use std::fmt;

use quadsolve_core::Coefficients;
use thiserror::Error;

use crate::{config::ConfigError, file::LoadError};

/// A case whose formatted solution differs from the expected sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Zero-based position of the case in the run.
    pub index: usize,
    pub coefficients: Coefficients,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error with {} coefficients!\n Expected: {}\n Got: {}",
            self.coefficients, self.expected, self.actual
        )
    }
}

/// Errors that can end a self-test run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Mismatch(Mismatch),

    #[error("case {index} with {coefficients} coefficients could not be solved")]
    Solve {
        index: usize,
        coefficients: Coefficients,
        #[source]
        source: quadsolve_solvers::Error,
    },

    #[error("case {index} with {coefficients} coefficients failed verification")]
    Verify {
        index: usize,
        coefficients: Coefficients,
        #[source]
        source: quadsolve_solvers::VerifyError,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("failed to load cases")]
    Load(#[from] LoadError),
}
