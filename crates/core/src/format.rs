use std::fmt;

use crate::{SolutionSet, is_integral};

/// A root rendered for display.
///
/// Integral values print as a bare integer (`2.0000003` prints as `2`);
/// everything else prints with exactly three decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if !is_integral(x) {
            return write!(f, "{x:.3}");
        }

        let whole = x.trunc();
        // Truncating a small negative value yields -0.0, which prints as "-0".
        #[allow(clippy::float_cmp)]
        if whole == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{whole:.0}")
    }
}

impl fmt::Display for SolutionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolution => f.write_str("The equation has no solutions."),
            Self::AllReals => f.write_str("Any real x is a solution."),
            Self::Exactly(roots) => match roots.second() {
                None => write!(
                    f,
                    "The equation has one solution: {}",
                    Number(roots.first())
                ),
                Some(second) => write!(
                    f,
                    "The equation has two solutions: {} and {}",
                    Number(roots.first()),
                    Number(second)
                ),
            },
        }
    }
}

/// Formats a root as an integer or a three-decimal real.
#[must_use]
pub fn format_number(x: f64) -> String {
    Number(x).to_string()
}

/// Formats a solution set as a sentence.
#[must_use]
pub fn format_solution(set: &SolutionSet) -> String {
    set.to_string()
}
