use std::error::Error as StdError;

use quadsolve_core::{Model, Sample, SolutionSet, is_zero};
use thiserror::Error;
use tracing::{debug, warn};

/// A root paired with the value of the equation's left-hand side there.
pub type Residual = Sample;

/// Errors that can occur when substituting roots back into a model.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("residual {residual} at x = {x} is not within tolerance of zero")]
    ResidualTooLarge { x: f64, residual: f64 },

    #[error("model is undefined at x = {x}")]
    Model {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Substitutes every listed root into `model` and checks the output.
///
/// Returns one [`Residual`] per root; sets without listed roots produce an
/// empty list.
///
/// # Errors
///
/// Returns an error if the model fails, or if any output is not within
/// tolerance of zero.
pub fn verify_roots<M>(model: &M, set: &SolutionSet) -> Result<Vec<Residual>, VerifyError>
where
    M: Model,
{
    set.roots()
        .iter()
        .map(|&x| {
            let sample = model.sample(x).map_err(|e| VerifyError::Model {
                x,
                source: Box::new(e),
            })?;

            if !is_zero(sample.value) {
                warn!(x, residual = sample.value, "root does not satisfy the equation");
                return Err(VerifyError::ResidualTooLarge {
                    x,
                    residual: sample.value,
                });
            }

            debug!(x, residual = sample.value, "root verified");
            Ok(sample)
        })
        .collect()
}
