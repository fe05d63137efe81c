use quadratic_core::{EquationSolution, all_finite, is_zero_within};

use super::{Config, Error};

/// Solves `bx + c = 0`.
///
/// Returns [`EquationSolution::IllegalInput`] if either coefficient is not
/// finite, [`EquationSolution::InfiniteRoots`] if both vanish, no roots if
/// only `b` vanishes, and the single root `-c / b` otherwise.
#[must_use]
pub fn solve_linear(b: f64, c: f64) -> EquationSolution {
    linear(b, c, Config::default().zero_tol)
}

/// Solves `bx + c = 0` using the tolerance from `config`.
///
/// # Errors
///
/// Returns an error if the config is invalid.
pub fn solve_linear_with(b: f64, c: f64, config: &Config) -> Result<EquationSolution, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    Ok(linear(b, c, config.zero_tol))
}

/// Shared by the quadratic solver when the leading coefficient vanishes.
pub(super) fn linear(b: f64, c: f64, zero_tol: f64) -> EquationSolution {
    if !all_finite(&[b, c]) {
        return EquationSolution::IllegalInput;
    }

    // 0x = -c
    if is_zero_within(b, zero_tol) {
        return if is_zero_within(c, zero_tol) {
            EquationSolution::InfiniteRoots
        } else {
            EquationSolution::NO_ROOTS
        };
    }

    EquationSolution::one_root(-c / b)
}
