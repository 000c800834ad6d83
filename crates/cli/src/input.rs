//! Reading coefficients typed at the prompt.

use std::io::BufRead;

use quadsolve_core::Coefficients;
use thiserror::Error;

/// Errors that can occur while reading coefficients.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected 3 coefficients, input ended after {found}")]
    MissingCoefficients { found: usize },

    #[error("{token:?} is not a number")]
    InvalidNumber {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// Reads three whitespace-separated coefficients, across lines if needed.
///
/// Anything after the third coefficient on its line is ignored.
///
/// # Errors
///
/// Returns an error if reading fails, a token is not a number, or the input
/// ends before three coefficients.
pub fn read_coefficients(reader: impl BufRead) -> Result<Coefficients, InputError> {
    let mut values = Vec::with_capacity(3);

    for line in reader.lines() {
        for token in line?.split_whitespace() {
            let value = token.parse::<f64>().map_err(|source| InputError::InvalidNumber {
                token: token.to_owned(),
                source,
            })?;
            values.push(value);

            if let [a, b, c] = values[..] {
                return Ok(Coefficients::from([a, b, c]));
            }
        }
    }

    Err(InputError::MissingCoefficients {
        found: values.len(),
    })
}
