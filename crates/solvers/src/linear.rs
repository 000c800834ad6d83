//! Solver for linear equations `a·x + b = 0`.

use quadsolve_core::{SolutionSet, is_zero};
use tracing::debug;

use crate::error::{Error, ensure_finite_coefficient, ensure_finite_result};

/// Solves `a·x + b = 0`.
///
/// When `a` is within tolerance of zero the equation holds for every real if
/// `b` is exactly zero, and for none otherwise.
///
/// # Errors
///
/// Returns an error if a coefficient is not finite, or if the root
/// overflows.
pub fn solve(a: f64, b: f64) -> Result<SolutionSet, Error> {
    ensure_finite_coefficient("a", a)?;
    ensure_finite_coefficient("b", b)?;
    solve_finite(a, b)
}

/// Solves with coefficients already known to be finite.
pub(crate) fn solve_finite(a: f64, b: f64) -> Result<SolutionSet, Error> {
    if is_zero(a) {
        #[allow(clippy::float_cmp)]
        let set = if b == 0.0 {
            SolutionSet::AllReals
        } else {
            SolutionSet::NoSolution
        };
        debug!(a, b, ?set, "degenerate linear equation");
        return Ok(set);
    }

    let x = ensure_finite_result("root", -b / a)?;
    debug!(a, b, x, "linear root");
    Ok(SolutionSet::one(x))
}
