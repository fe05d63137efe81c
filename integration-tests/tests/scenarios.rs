use approx::assert_relative_eq;
use integration_tests::render_two_pass;
use quadratic_solve::{
    EquationSolution, Roots,
    describe::{describe, describe_len},
    equation::{solve_linear, solve_quadratic},
};

fn roots_of(solution: EquationSolution) -> Vec<f64> {
    match solution {
        EquationSolution::FiniteRoots(roots) => roots.as_slice().to_vec(),
        other => panic!("expected finite roots, got {other:?}"),
    }
}

#[test]
fn two_irrational_roots() {
    let solution = solve_quadratic(-5.0, 5.0, 5.0);
    let roots = roots_of(solution);
    let sqrt_5 = 5.0_f64.sqrt();

    assert_eq!(roots.len(), 2);
    assert_relative_eq!(roots[0], (1.0 - sqrt_5) / 2.0, epsilon = 1e-12);
    assert_relative_eq!(roots[1], (1.0 + sqrt_5) / 2.0, epsilon = 1e-12);
    assert_eq!(
        render_two_pass(&solution),
        "Equation has 2 roots: -0.618034, 1.618034"
    );
}

#[test]
fn two_rational_roots() {
    let solution = solve_quadratic(-7.0, 10.0, -3.0);

    assert_eq!(
        render_two_pass(&solution),
        "Equation has 2 roots: 0.428571, 1.000000"
    );
}

#[test]
fn one_rational_root() {
    let solution = solve_quadratic(4.0, 4.0, 1.0);

    assert_eq!(solution, EquationSolution::one_root(-0.5));
    assert_eq!(render_two_pass(&solution), "Equation has 1 roots: -0.500000");
}

#[test]
fn zero_roots() {
    let solution = solve_quadratic(9.0, -7.0, 16.0);

    assert_eq!(solution, EquationSolution::FiniteRoots(Roots::Zero));
    assert_eq!(render_two_pass(&solution), "Equation has no solution");
}

#[test]
fn linear_with_one_root() {
    let solution = solve_quadratic(0.0, 10.0, -3.0);

    assert_relative_eq!(roots_of(solution)[0], 0.3);
    assert_eq!(render_two_pass(&solution), "Equation has 1 roots: 0.300000");
}

#[test]
fn linear_with_infinite_roots() {
    let solution = solve_quadratic(0.0, 0.0, 0.0);

    assert_eq!(solution, EquationSolution::InfiniteRoots);
    assert_eq!(
        render_two_pass(&solution),
        "This equation has infinite number of roots"
    );
}

#[test]
fn linear_with_zero_roots() {
    assert_eq!(solve_quadratic(0.0, 0.0, 3.0), EquationSolution::NO_ROOTS);
    assert_eq!(solve_linear(0.0, 3.0), EquationSolution::NO_ROOTS);
}

#[test]
fn nan_is_illegal_input() {
    let solution = solve_quadratic(1.0, f64::NAN, 3.0);

    assert_eq!(solution, EquationSolution::IllegalInput);
    assert_eq!(
        render_two_pass(&solution),
        "Solving failed due to illegal input"
    );
}

#[test]
fn infinity_is_illegal_input() {
    assert_eq!(
        solve_quadratic(8.0, 2.0, f64::INFINITY),
        EquationSolution::IllegalInput
    );
}

#[test]
fn overflowing_discriminant_is_still_classified() {
    let solution = solve_quadratic(1e200, 1e200, 1e200);
    assert_eq!(render_two_pass(&solution), "Equation has no solution");

    let roots = roots_of(solve_quadratic(1.0, 1e200, 0.0));
    assert_eq!(roots.len(), 2);
    assert_relative_eq!(roots[0], 0.0);
    assert_relative_eq!(roots[1], -1e200, max_relative = 1e-12);
}

#[test]
fn truncated_render_still_reports_full_length() {
    let solution = solve_quadratic(-5.0, 5.0, 5.0);
    let len = describe_len(&solution);

    let mut buffer = [0; 16];
    let description = describe(&solution, &mut buffer);

    assert_eq!(description.as_str(), "Equation has 2 ");
    assert_eq!(description.len(), len);
    assert!(description.is_truncated());
}
