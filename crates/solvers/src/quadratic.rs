//! Solver for quadratic equations `a·x² + b·x + c = 0`.
//!
//! The sign of the discriminant `D = b² - 4ac` decides the root count:
//! a `D` within tolerance of zero is a double root, reported once. A
//! vanishing `a` reduces the equation to `b·x + c = 0`, which is handed to
//! the [`linear`](crate::linear) solver unchanged.

use quadsolve_core::{Coefficients, SolutionSet, is_zero};
use tracing::debug;

use crate::{
    error::{Error, ensure_finite_coefficient, ensure_finite_result},
    linear,
};

/// Solves `a·x² + b·x + c = 0`.
///
/// # Errors
///
/// Returns an error if a coefficient is not finite, or if the discriminant
/// or a root overflows.
pub fn solve(a: f64, b: f64, c: f64) -> Result<SolutionSet, Error> {
    solve_coefficients(&Coefficients::new(a, b, c))
}

/// Solves the equation described by `coefficients`.
///
/// # Errors
///
/// Returns an error if a coefficient is not finite, or if the discriminant
/// or a root overflows.
pub fn solve_coefficients(coefficients: &Coefficients) -> Result<SolutionSet, Error> {
    for (name, value) in coefficients.named() {
        ensure_finite_coefficient(name, value)?;
    }

    let Coefficients { a, b, c } = *coefficients;
    if is_zero(a) {
        debug!(a, "leading coefficient vanishes, solving as linear");
        return linear::solve_finite(b, c);
    }

    let discriminant = ensure_finite_result("discriminant", coefficients.discriminant())?;
    let denominator = 2.0 * a;

    if is_zero(discriminant) {
        let x = ensure_finite_result("root", -b / denominator)?;
        debug!(a, b, c, discriminant, x, "double root");
        return Ok(SolutionSet::one(x));
    }

    if discriminant < 0.0 {
        debug!(a, b, c, discriminant, "no real roots");
        return Ok(SolutionSet::NoSolution);
    }

    let sqrt_d = discriminant.sqrt();
    let x1 = ensure_finite_result("root", (-b + sqrt_d) / denominator)?;
    let x2 = ensure_finite_result("root", (-b - sqrt_d) / denominator)?;
    debug!(a, b, c, discriminant, x1, x2, "two roots");

    // A negative `a` flips the order of the two expressions above.
    Ok(SolutionSet::two(x1, x2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn two_distinct_roots() {
        let set = solve(1.0, -6.0, 5.0).expect("should solve");
        let roots = set.roots();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 5.0);
        assert_relative_eq!(roots[1], 1.0);
    }

    #[test]
    fn negative_leading_coefficient_still_descends() {
        let set = solve(-1.0, 6.0, -5.0).expect("should solve");
        let roots = set.roots();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 5.0);
        assert_relative_eq!(roots[1], 1.0);
    }

    #[test]
    fn exact_double_root() {
        let set = solve(1.0, -2.0, 1.0).expect("should solve");
        assert_eq!(set.roots().len(), 1);
        assert_relative_eq!(set.roots()[0], 1.0);
    }

    #[test]
    fn near_double_root_collapses() {
        // D = 0.0004, within tolerance of zero.
        let set = solve(1.0, -2.0001, 1.0).expect("should solve");
        assert_eq!(set.roots().len(), 1);
        assert_relative_eq!(set.roots()[0], 1.000_05, epsilon = 1e-12);
    }

    #[test]
    fn slightly_negative_discriminant_collapses() {
        // D = -0.00039999 is within tolerance of zero, so it is a double root
        // rather than no solution.
        let set = solve(1.0, -1.9999, 1.0).expect("should solve");
        assert_eq!(set.roots().len(), 1);
        assert_relative_eq!(set.roots()[0], 0.999_95, epsilon = 1e-12);

        // 0.99995 truncates to 0, so it prints with decimals.
        assert_eq!(
            quadsolve_core::format_solution(&set),
            "The equation has one solution: 1.000"
        );
    }

    #[test]
    fn discriminant_at_negative_tolerance_has_no_roots() {
        // D = -0.001 is not strictly within tolerance.
        assert_eq!(solve(1.0, 0.0, 0.000_25), Ok(SolutionSet::NoSolution));
    }

    #[test]
    fn discriminant_at_positive_tolerance_has_two_roots() {
        // D = 0.001 is not strictly within tolerance.
        let set = solve(1.0, 0.0, -0.000_25).expect("should solve");
        let roots = set.roots();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 0.000_25_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(roots[1], -0.000_25_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(
            quadsolve_core::format_solution(&set),
            "The equation has two solutions: 0.016 and -0.016"
        );
    }

    #[test]
    fn negative_discriminant() {
        assert_eq!(solve(1.0, 0.0, 1.0), Ok(SolutionSet::NoSolution));
    }

    #[test]
    fn vanishing_leading_coefficient_is_linear() {
        assert_eq!(solve(0.0, 0.0, 0.0), Ok(SolutionSet::AllReals));
        assert_eq!(solve(0.0, 0.0, 1.0), Ok(SolutionSet::NoSolution));
        assert_eq!(solve(0.0005, 1.0, -1.0), Ok(SolutionSet::one(1.0)));
    }

    #[test]
    fn solves_from_coefficients() {
        let coefficients = Coefficients::new(2.0, -3.0, 1.0);
        let set = solve_coefficients(&coefficients).expect("should solve");
        let roots = set.roots();
        assert_relative_eq!(roots[0], 1.0);
        assert_relative_eq!(roots[1], 0.5);
    }

    #[test]
    fn errors_on_non_finite_coefficient() {
        assert!(matches!(
            solve(1.0, 2.0, f64::NEG_INFINITY),
            Err(Error::NonFiniteCoefficient { name: "c", .. })
        ));
    }

    #[test]
    fn errors_on_overflowing_discriminant() {
        assert!(matches!(
            solve(1.0, 1e200, 1.0),
            Err(Error::NonFiniteResult {
                quantity: "discriminant",
                ..
            })
        ));
    }
}
