use crate::error::DegenerateSystem;

/// A 2x2 linear system of the form:
///
/// ```text
///     a1*x + b1*y = c1
///     a2*x + b2*y = c2
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSystem2x2 {
    /// Coefficient of `x` in the first equation.
    pub a1: f64,
    /// Coefficient of `y` in the first equation.
    pub b1: f64,
    /// Right-hand side of the first equation.
    pub c1: f64,
    /// Coefficient of `x` in the second equation.
    pub a2: f64,
    /// Coefficient of `y` in the second equation.
    pub b2: f64,
    /// Right-hand side of the second equation.
    pub c2: f64,
}

impl LinearSystem2x2 {
    /// Creates a system from its six coefficients, in equation order.
    #[must_use]
    pub const fn new(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64) -> Self {
        Self { a1, b1, c1, a2, b2, c2 }
    }

    /// Computes the determinant `a1*b2 - a2*b1` of the coefficient matrix.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a1 * self.b2 - self.a2 * self.b1
    }
}

/// The unique solution `(x, y)` of a non-degenerate 2x2 linear system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionPoint {
    /// The `x` coordinate.
    pub x: f64,
    /// The `y` coordinate.
    pub y: f64,
}

/// Solves a 2x2 linear system by Cramer's rule.
///
/// The determinant is compared *exactly* against zero: a degenerate system
/// (no solution or infinitely many, the two are not distinguished) is
/// reported as
/// [`DegenerateSystem`], while any nonzero determinant, however small,
/// yields a solution. The computation is pure and deterministic.
///
/// # Parameters
/// - `system`: The six coefficients of the system.
///
/// # Returns
/// The unique solution point, or `DegenerateSystem` when the determinant
/// is zero.
///
/// # Errors
/// Returns [`DegenerateSystem`] if `a1*b2 - a2*b1 == 0`.
///
/// # Example
/// ```
/// use numbox::solver::{LinearSystem2x2, solve};
///
/// // x + y = 3, x - y = 1  =>  x = 2, y = 1
/// let system = LinearSystem2x2::new(1.0, 1.0, 3.0, 1.0, -1.0, 1.0);
/// let solution = solve(&system).unwrap();
///
/// assert_eq!(solution.x, 2.0);
/// assert_eq!(solution.y, 1.0);
/// ```
pub fn solve(system: &LinearSystem2x2) -> Result<SolutionPoint, DegenerateSystem> {
    let determinant = system.determinant();
    if determinant == 0.0 {
        return Err(DegenerateSystem { determinant });
    }

    let x = (system.c1 * system.b2 - system.c2 * system.b1) / determinant;
    let y = (system.a1 * system.c2 - system.a2 * system.c1) / determinant;

    Ok(SolutionPoint { x, y })
}
