//! Closed-form solvers for linear and quadratic equations, and a
//! measure-then-render describer for their solutions.

pub mod describe;
pub mod equation;

pub use quadratic_core::{EPSILON, EquationSolution, Roots};
