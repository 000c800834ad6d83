use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::Case;

/// Errors that can occur when reading a case file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse case file")]
    Parse(#[from] toml::de::Error),

    #[error("case file contains no cases")]
    NoCases,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseFile {
    #[serde(default)]
    case: Vec<Case>,
}

/// Parses cases from TOML text with one `[[case]]` table per case.
///
/// # Errors
///
/// Returns an error if the text is not a valid case file or holds no cases.
pub fn parse_cases(text: &str) -> Result<Vec<Case>, LoadError> {
    let file: CaseFile = toml::from_str(text)?;
    if file.case.is_empty() {
        return Err(LoadError::NoCases);
    }
    Ok(file.case)
}

/// Reads cases from a TOML case file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or holds no cases.
pub fn load_cases(path: impl AsRef<Path>) -> Result<Vec<Case>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let cases = parse_cases(&text)?;
    debug!(path = %path.display(), count = cases.len(), "loaded case file");
    Ok(cases)
}
