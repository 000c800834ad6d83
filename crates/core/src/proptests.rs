//! Property-based tests for the predicates and the formatter.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{SolutionSet, format_number, format_solution, is_integral};

    // Whole numbers nudged away from zero by less than the tolerance
    fn near_integer() -> impl Strategy<Value = f64> {
        (-100_000i32..100_000i32, 0.0f64..0.000_9f64).prop_map(|(n, nudge)| {
            let n = f64::from(n);
            n + nudge.copysign(n)
        })
    }

    // Values whose fractional part is clearly away from zero
    fn fractional() -> impl Strategy<Value = f64> {
        (-100_000i32..100_000i32, 0.01f64..0.99f64).prop_map(|(n, frac)| f64::from(n) + frac)
    }

    fn solution_set() -> impl Strategy<Value = SolutionSet> {
        prop_oneof![
            Just(SolutionSet::NoSolution),
            Just(SolutionSet::AllReals),
            (-1e6f64..1e6f64).prop_map(SolutionSet::one),
            (-1e6f64..1e6f64, -1e6f64..1e6f64).prop_map(|(x1, x2)| SolutionSet::two(x1, x2)),
        ]
    }

    proptest! {
        #[test]
        fn integral_numbers_print_without_decimal_point(x in near_integer()) {
            prop_assume!(is_integral(x));
            let text = format_number(x);
            prop_assert!(!text.contains('.'), "{x} printed as {text}");
        }

        #[test]
        fn fractional_numbers_print_three_decimals(x in fractional()) {
            prop_assume!(!is_integral(x));
            let text = format_number(x);
            let (_, decimals) = text.split_once('.').expect("decimal point");
            prop_assert_eq!(decimals.len(), 3);
        }

        #[test]
        fn formatting_is_idempotent(set in solution_set()) {
            prop_assert_eq!(format_solution(&set), format_solution(&set));
        }

        #[test]
        fn roots_never_exceed_two_and_descend(set in solution_set()) {
            let roots = set.roots();
            prop_assert!(roots.len() <= 2);
            if let [first, second] = roots {
                prop_assert!(first >= second);
            }
        }
    }
}
