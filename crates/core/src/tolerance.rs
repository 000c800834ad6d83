/// Absolute tolerance shared by every "effectively zero" check.
///
/// Degeneracy checks, the discriminant sign, double-root detection, and
/// integer display all compare against this one value.
pub const TOLERANCE: f64 = 0.001;

/// Returns true if `x` lies strictly within [`TOLERANCE`] of zero.
#[must_use]
pub fn is_zero(x: f64) -> bool {
    x.abs() < TOLERANCE
}

/// Returns true if `x` lies within [`TOLERANCE`] of its truncation toward zero.
///
/// Only used to pick a display format, never to solve.
#[must_use]
pub fn is_integral(x: f64) -> bool {
    is_zero(x - x.trunc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_strict() {
        assert!(is_zero(0.0));
        assert!(is_zero(-0.0));
        assert!(is_zero(0.000_999));
        assert!(is_zero(-0.000_999));
        assert!(!is_zero(TOLERANCE));
        assert!(!is_zero(-TOLERANCE));
        assert!(!is_zero(0.5));
    }

    #[test]
    fn integral_values() {
        assert!(is_integral(2.0));
        assert!(is_integral(-5.0));
        assert!(is_integral(2.000_000_3));
        assert!(is_integral(-3.000_4));
        assert!(is_integral(1.000_05));
    }

    #[test]
    fn integral_truncates_toward_zero() {
        // 2.9995 truncates to 2, leaving a fractional part of 0.9995.
        assert!(!is_integral(2.999_5));
        assert!(!is_integral(-2.999_5));
        assert!(!is_integral(1.5));
        assert!(!is_integral(0.25));
    }
}
