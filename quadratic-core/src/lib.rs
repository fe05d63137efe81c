//! Solution types and the shared zero tolerance for the quadratic equation solver.

mod error;
mod raw;
mod roots;
mod solution;
mod tolerance;

pub use error::SolutionError;
pub use raw::{RawSolution, Status};
pub use roots::Roots;
pub use solution::EquationSolution;
pub use tolerance::{EPSILON, all_finite, is_zero_within};
