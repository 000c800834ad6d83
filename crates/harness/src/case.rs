use quadsolve_core::{Coefficients, format_solution};
use quadsolve_solvers::solve_quadratic;
use serde::Deserialize;

/// One row of the self-test table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Row")]
pub struct Case {
    /// Coefficients of the equation to solve.
    pub coefficients: Coefficients,
    /// Exact sentence the formatter must produce.
    pub expected: String,
}

/// A `[[case]]` table as written in a case file.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Row {
    a: f64,
    b: f64,
    c: f64,
    expected: String,
}

impl From<Row> for Case {
    fn from(Row { a, b, c, expected }: Row) -> Self {
        Self {
            coefficients: Coefficients::from([a, b, c]),
            expected,
        }
    }
}

impl Case {
    /// Creates a case for `a·x² + b·x + c = 0`.
    pub fn new(a: f64, b: f64, c: f64, expected: impl Into<String>) -> Self {
        Self {
            coefficients: Coefficients::new(a, b, c),
            expected: expected.into(),
        }
    }

    /// Solves the case and formats the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver rejects the coefficients.
    pub fn actual(&self) -> Result<String, quadsolve_solvers::Error> {
        let Coefficients { a, b, c } = self.coefficients;
        solve_quadratic(a, b, c).map(|set| format_solution(&set))
    }
}

/// Returns the built-in cases, in the order they run.
#[must_use]
pub fn builtin_cases() -> Vec<Case> {
    vec![
        Case::new(0.0, 0.0, 0.0, "Any real x is a solution."),
        Case::new(0.0, 0.0, 1.0, "The equation has no solutions."),
        Case::new(0.0, 1.0, -1.0, "The equation has one solution: 1"),
        Case::new(0.0, 1.0, 0.0, "The equation has one solution: 0"),
        Case::new(1.0, -2.0, 1.0, "The equation has one solution: 1"),
        Case::new(1.0, -2.0001, 1.0, "The equation has one solution: 1"),
        Case::new(1.0, -6.0, 5.0, "The equation has two solutions: 5 and 1"),
    ]
}
