use quadratic_core::EPSILON;

/// Configuration for the closed-form solvers.
///
/// A single tolerance drives every zero test within a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub zero_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { zero_tol: EPSILON }
    }
}

impl Config {
    /// Validates that the tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.zero_tol.is_finite() || self.zero_tol < 0.0 {
            return Err("zero_tol must be finite and non-negative");
        }
        Ok(())
    }
}
