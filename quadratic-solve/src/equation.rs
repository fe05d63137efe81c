mod config;
mod error;
mod linear;
mod quadratic;

pub use config::Config;
pub use error::Error;
pub use linear::{solve_linear, solve_linear_with};
pub use quadratic::{solve_quadratic, solve_quadratic_with};
