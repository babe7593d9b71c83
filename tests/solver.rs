use numbox::{LinearSystem2x2, solve_linear_system};

/// Checks that the solution satisfies both equations of the system.
fn assert_solves(system: &LinearSystem2x2) {
    let solution = match solve_linear_system(system) {
        Ok(solution) => solution,
        Err(e) => panic!("{system:?} was reported degenerate: {e}"),
    };

    let residual1 = system.a1 * solution.x + system.b1 * solution.y - system.c1;
    let residual2 = system.a2 * solution.x + system.b2 * solution.y - system.c2;
    assert!(residual1.abs() < 1e-9 && residual2.abs() < 1e-9,
            "{system:?} solved to {solution:?} with residuals ({residual1}, {residual2})");
}

fn assert_degenerate(system: &LinearSystem2x2) {
    if let Ok(solution) = solve_linear_system(system) {
        panic!("{system:?} produced {solution:?} but has no unique solution");
    }
}

#[test]
fn simple_systems_solve_exactly() {
    // x + y = 3, x - y = 1  =>  (2, 1)
    let solution = solve_linear_system(&LinearSystem2x2::new(1.0, 1.0, 3.0, 1.0, -1.0, 1.0))
        .unwrap();
    assert_eq!((solution.x, solution.y), (2.0, 1.0));

    // 2x + 3y = 13, x - y = 1  =>  (3.2, 2.2)
    assert_solves(&LinearSystem2x2::new(2.0, 3.0, 13.0, 1.0, -1.0, 1.0));
    assert_solves(&LinearSystem2x2::new(0.5, -0.25, 1.0, 3.0, 7.0, -2.0));
}

#[test]
fn negative_and_fractional_coefficients() {
    assert_solves(&LinearSystem2x2::new(-1.0, 2.5, 0.75, 4.0, -0.1, 12.0));
    assert_solves(&LinearSystem2x2::new(1e-3, 1.0, 2.0, 1.0, 1e-3, 3.0));
}

#[test]
fn zero_determinant_is_degenerate() {
    // Identical equations: infinitely many solutions.
    assert_degenerate(&LinearSystem2x2::new(1.0, 1.0, 0.0, 1.0, 1.0, 0.0));
    // Parallel lines: no solution. The two cases are not distinguished.
    assert_degenerate(&LinearSystem2x2::new(1.0, 1.0, 0.0, 1.0, 1.0, 5.0));
    assert_degenerate(&LinearSystem2x2::new(2.0, 4.0, 1.0, 1.0, 2.0, 3.0));
    assert_degenerate(&LinearSystem2x2::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
}

#[test]
fn tiny_nonzero_determinants_still_solve() {
    // The degeneracy check is an exact zero comparison, so an
    // ill-conditioned but formally invertible system solves.
    let system = LinearSystem2x2::new(1.0, 1.0, 2.0, 1.0, 1.0 + 1e-12, 2.0);
    assert!(solve_linear_system(&system).is_ok());
}

#[test]
fn determinant_matches_definition() {
    let system = LinearSystem2x2::new(2.0, 3.0, 0.0, 4.0, 5.0, 0.0);
    assert_eq!(system.determinant(), 2.0 * 5.0 - 4.0 * 3.0);
}

#[test]
fn degenerate_error_reports_the_determinant() {
    let error = solve_linear_system(&LinearSystem2x2::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0))
        .unwrap_err();
    assert_eq!(error.determinant, 0.0);
    assert!(!error.to_string().is_empty());
}
