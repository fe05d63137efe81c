use thiserror::Error;

/// Errors that can occur when solving with an explicit [`Config`](super::Config).
///
/// Non-finite coefficients are not errors; they produce
/// [`EquationSolution::IllegalInput`](quadratic_core::EquationSolution::IllegalInput).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
