//! Shared helpers for the cross-crate tests.

use quadratic_solve::{
    EquationSolution,
    describe::{describe, describe_len},
};

/// Renders a description the way an interactive caller would: measure the
/// text first, then render into a buffer sized exactly for it.
///
/// # Panics
///
/// Panics if the rendered length disagrees with the measured one.
pub fn render_two_pass(solution: &EquationSolution) -> String {
    let len = describe_len(solution);
    let mut buffer = vec![0; len + 1];

    let description = describe(solution, &mut buffer);
    assert_eq!(description.len(), len, "render length differs from measured");
    assert!(!description.is_truncated(), "sized buffer was truncated");

    description.to_string()
}
