use quadratic_core::{EquationSolution, all_finite, is_zero_within};

use super::{Config, Error, linear::linear};

/// Solves `ax² + bx + c = 0` over the reals.
///
/// If `a` vanishes the equation is solved as `bx + c = 0`, with exactly the
/// result [`solve_linear`](super::solve_linear) would give. Otherwise the
/// discriminant `D = b² - 4ac` decides the root count: one root `-b / 2a`
/// when `D` vanishes, none when it is negative, and two roots when it is
/// positive. Two roots are ordered `(-b + √D) / 2a` first, then
/// `(-b - √D) / 2a`.
///
/// If `D` overflows, the coefficients are first divided by the largest of
/// their magnitudes. The roots are unchanged, and the zero test then applies
/// to the discriminant of the scaled equation. A root whose magnitude
/// exceeds `f64::MAX` is reported as infinite; a root is never NaN.
///
/// Any non-finite coefficient gives [`EquationSolution::IllegalInput`].
///
/// # Examples
///
/// ```
/// use quadratic_solve::{EquationSolution, equation::solve_quadratic};
///
/// assert_eq!(solve_quadratic(4.0, 4.0, 1.0), EquationSolution::one_root(-0.5));
/// assert_eq!(solve_quadratic(0.0, 0.0, 0.0), EquationSolution::InfiniteRoots);
/// assert_eq!(solve_quadratic(1.0, f64::NAN, 3.0), EquationSolution::IllegalInput);
/// ```
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> EquationSolution {
    quadratic(a, b, c, Config::default().zero_tol)
}

/// Solves `ax² + bx + c = 0` using the tolerance from `config`.
///
/// # Errors
///
/// Returns an error if the config is invalid.
pub fn solve_quadratic_with(
    a: f64,
    b: f64,
    c: f64,
    config: &Config,
) -> Result<EquationSolution, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    Ok(quadratic(a, b, c, config.zero_tol))
}

fn quadratic(a: f64, b: f64, c: f64, zero_tol: f64) -> EquationSolution {
    if !all_finite(&[a, b, c]) {
        return EquationSolution::IllegalInput;
    }

    if is_zero_within(a, zero_tol) {
        return linear(b, c, zero_tol);
    }

    let (a, b, c) = if discriminant_of(a, b, c).is_finite() {
        (a, b, c)
    } else {
        // Same roots; every scaled coefficient is in [-1, 1], so D stays in [-4, 5].
        let scale = a.abs().max(b.abs()).max(c.abs());
        (a / scale, b / scale, c / scale)
    };
    let discriminant = discriminant_of(a, b, c);

    if is_zero_within(discriminant, zero_tol) {
        return EquationSolution::one_root(-b / (2.0 * a));
    }

    if discriminant < 0.0 {
        return EquationSolution::NO_ROOTS;
    }

    let sqrt_d = discriminant.sqrt();
    EquationSolution::two_roots((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
}

fn discriminant_of(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}
