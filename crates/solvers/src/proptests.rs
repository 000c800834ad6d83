//! Property-based tests for the solvers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quadsolve_core::{Coefficients, SolutionSet, TOLERANCE, is_zero};

    use crate::{solve_quadratic, verify_roots};

    fn coefficient() -> impl Strategy<Value = f64> {
        -100.0f64..100.0f64
    }

    // Leading coefficients clearly away from the tolerance band
    fn leading() -> impl Strategy<Value = f64> {
        prop_oneof![-100.0f64..-0.01f64, 0.01f64..100.0f64]
    }

    proptest! {
        #[test]
        fn positive_discriminant_gives_two_descending_roots(
            a in leading(),
            b in coefficient(),
            c in coefficient(),
        ) {
            let coefficients = Coefficients::new(a, b, c);
            prop_assume!(coefficients.discriminant() >= TOLERANCE);

            let set = solve_quadratic(a, b, c).expect("finite inputs");
            let roots = set.roots();
            prop_assert_eq!(roots.len(), 2);
            prop_assert!(roots[0] >= roots[1]);

            for &x in roots {
                prop_assert!(is_zero(coefficients.evaluate(x)), "residual at {x}");
            }
            prop_assert!(verify_roots(&coefficients, &set).is_ok());
        }

        #[test]
        fn root_count_is_bounded(
            a in prop_oneof![Just(0.0), coefficient()],
            b in prop_oneof![Just(0.0), coefficient()],
            c in prop_oneof![Just(0.0), coefficient()],
        ) {
            let set = solve_quadratic(a, b, c).expect("finite inputs");
            match set {
                SolutionSet::NoSolution => {}
                SolutionSet::AllReals => prop_assert!(is_zero(a) && is_zero(b)),
                SolutionSet::Exactly(roots) => {
                    prop_assert!(matches!(roots.count(), 1 | 2));
                }
            }
        }

        #[test]
        fn solving_is_deterministic(a in coefficient(), b in coefficient(), c in coefficient()) {
            prop_assert_eq!(solve_quadratic(a, b, c), solve_quadratic(a, b, c));
        }
    }
}
