//! Table-driven self-test for the equation solvers.
//!
//! A [`Case`] pairs a coefficient triple with the exact sentence the solver
//! and formatter must produce. [`run`] drives every case through that
//! pipeline in order and stops at the first mismatch, reporting the
//! coefficients, the expected sentence, and the actual one.
//!
//! Cases come from the built-in table ([`builtin_cases`]) or from a TOML
//! file ([`load_cases`]):
//!
//! ```toml
//! [[case]]
//! a = 1.0
//! b = -6.0
//! c = 5.0
//! expected = "The equation has two solutions: 5 and 1"
//! ```
//!
//! # Observer Events
//!
//! The runner emits one [`Event`] per case: [`Event::Passed`] or
//! [`Event::Failed`]. Observers can return [`Action::StopEarly`] to end the
//! run after the current case.

mod case;
mod config;
mod error;
mod file;
mod run;

pub use case::{Case, builtin_cases};
pub use config::{CaseSource, Config, ConfigError};
pub use error::{Error, Mismatch};
pub use file::{LoadError, load_cases, parse_cases};
pub use run::{Action, Event, Report, SUCCESS_MESSAGE, Status, run, run_unobserved, self_test};
