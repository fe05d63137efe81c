/// Magnitude at or below which a value is treated as exactly zero.
///
/// Every zero test in the solver goes through this one constant: vanishing
/// leading coefficients, the degenerate `c` in `0x + c = 0`, and the
/// discriminant. Mixing tolerances across branches produces inconsistent
/// root counts near the boundaries.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` if `|value| <= tol`.
///
/// NaN is never zero.
#[inline]
#[must_use]
pub fn is_zero_within(value: f64, tol: f64) -> bool {
    value.abs() <= tol
}

/// Returns `true` if every value is finite (neither NaN nor infinite).
#[inline]
#[must_use]
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        assert!(is_zero_within(0.0, EPSILON));
        assert!(is_zero_within(-0.0, EPSILON));
        assert!(is_zero_within(EPSILON, EPSILON));
        assert!(is_zero_within(-EPSILON, EPSILON));
        assert!(!is_zero_within(2.0 * EPSILON, EPSILON));
        assert!(!is_zero_within(-2.0 * EPSILON, EPSILON));
    }

    #[test]
    fn non_finite_values_are_never_zero() {
        assert!(!is_zero_within(f64::NAN, EPSILON));
        assert!(!is_zero_within(f64::INFINITY, EPSILON));
        assert!(!is_zero_within(f64::NEG_INFINITY, EPSILON));
    }

    #[test]
    fn custom_tolerance() {
        assert!(is_zero_within(0.05, 0.1));
        assert!(!is_zero_within(0.05, 0.0));
        assert!(is_zero_within(0.0, 0.0));
    }

    #[test]
    fn finiteness_check_covers_every_value() {
        assert!(all_finite(&[]));
        assert!(all_finite(&[1.0, -2.0, 0.0]));
        assert!(!all_finite(&[1.0, f64::NAN]));
        assert!(!all_finite(&[f64::NEG_INFINITY, 1.0]));
    }
}
