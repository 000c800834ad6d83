use std::path::PathBuf;

use thiserror::Error;

/// Where a self-test run takes its cases from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaseSource {
    /// The built-in table.
    #[default]
    Builtin,
    /// A TOML case file.
    File(PathBuf),
}

/// Configuration for a self-test run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    source: CaseSource,
    verify_roots: bool,
}

/// Errors that can occur when validating a self-test config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("case file path is empty")]
    EmptyPath,
}

impl Config {
    /// Creates a validated config.
    ///
    /// With `verify_roots` set, every reported root is also substituted back
    /// into its equation.
    ///
    /// # Errors
    ///
    /// Returns an error if a case file source has an empty path.
    pub fn new(source: CaseSource, verify_roots: bool) -> Result<Self, ConfigError> {
        if let CaseSource::File(path) = &source
            && path.as_os_str().is_empty()
        {
            return Err(ConfigError::EmptyPath);
        }

        Ok(Self {
            source,
            verify_roots,
        })
    }

    /// Returns the case source.
    #[must_use]
    pub fn source(&self) -> &CaseSource {
        &self.source
    }

    /// Returns true if roots are substituted back after solving.
    #[must_use]
    pub fn verify_roots(&self) -> bool {
        self.verify_roots
    }
}
