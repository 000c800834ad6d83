//! Solvers for linear and quadratic equations with real coefficients.
//!
//! Both solvers return a [`SolutionSet`] listing the real roots in
//! descending order. "Equal to zero" always means within
//! [`TOLERANCE`], with one exception: a linear equation whose `x`
//! coefficient vanishes is satisfied by every real only when its constant
//! term is exactly zero.
//!
//! # Solvers
//!
//! - [`linear`] — `a·x + b = 0`
//! - [`quadratic`] — `a·x² + b·x + c = 0`, falling back to [`linear`] when
//!   `a` vanishes
//!
//! [`verify_roots`] substitutes reported roots back into a [`Model`] and
//! checks the residuals.
//!
//! [`SolutionSet`]: quadsolve_core::SolutionSet
//! [`TOLERANCE`]: quadsolve_core::TOLERANCE
//! [`Model`]: quadsolve_core::Model

mod error;
mod verify;

#[cfg(test)]
mod proptests;

pub mod linear;
pub mod quadratic;

pub use error::Error;
pub use linear::solve as solve_linear;
pub use quadratic::solve as solve_quadratic;
pub use verify::{Residual, VerifyError, verify_roots};
