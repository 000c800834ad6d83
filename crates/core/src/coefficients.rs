use std::{convert::Infallible, fmt};

use crate::Model;

/// Coefficients of the equation `a·x² + b·x + c = 0`.
///
/// A zero `a` describes the linear equation `b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Coefficient of `x²`.
    pub a: f64,
    /// Coefficient of `x`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Coefficients {
    /// Creates a coefficient triple.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns the discriminant `b² - 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Evaluates `a·x² + b·x + c`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Returns each coefficient paired with its name.
    #[must_use]
    pub fn named(&self) -> [(&'static str, f64); 3] {
        [("a", self.a), ("b", self.b), ("c", self.c)]
    }
}

impl From<[f64; 3]> for Coefficients {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}

/// Prints the three coefficients with six decimals, separated by spaces.
impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:.6} {:.6}", self.a, self.b, self.c)
    }
}

impl Model for Coefficients {
    type Error = Infallible;

    fn value_at(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self.evaluate(x))
    }
}
