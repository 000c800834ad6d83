//! Core types for solving linear and quadratic equations.
//!
//! This crate defines the values that solvers, formatters, and the self-test
//! harness share:
//!
//! - [`Coefficients`] — the `(a, b, c)` triple of `a·x² + b·x + c = 0`
//! - [`SolutionSet`] and [`Roots`] — the real solution set of an equation
//! - [`Number`] and [`format_solution`] — the human-readable rendering
//! - [`is_zero`] and [`is_integral`] — predicates built on [`TOLERANCE`]
//! - [`Model`] and [`Sample`] — a function of `x` and its value at a point
//! - [`Observer`] — watches a run and may cut it short

mod coefficients;
mod format;
mod model;
mod observer;
mod solution;
mod tolerance;

#[cfg(test)]
mod proptests;

pub use coefficients::Coefficients;
pub use format::{Number, format_number, format_solution};
pub use model::{Model, Sample};
pub use observer::Observer;
pub use solution::{Roots, SolutionSet};
pub use tolerance::{TOLERANCE, is_integral, is_zero};
