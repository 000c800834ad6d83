use thiserror::Error;

/// Errors that can occur while solving an equation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("coefficient {name} is not finite: {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },

    #[error("{quantity} is not finite: {value}")]
    NonFiniteResult { quantity: &'static str, value: f64 },
}

/// Rejects a non-finite input coefficient.
pub(crate) fn ensure_finite_coefficient(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteCoefficient { name, value })
    }
}

/// Rejects an intermediate or final value that overflowed.
pub(crate) fn ensure_finite_result(quantity: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteResult { quantity, value })
    }
}
