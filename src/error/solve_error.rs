/// Reported when a 2x2 linear system has a zero determinant.
///
/// A zero determinant means the two equations are linearly dependent: the
/// system has either no solution or infinitely many, and the solver does not
/// distinguish the two sub-cases. The check is an exact floating-point
/// comparison against zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateSystem {
    /// The determinant `a1*b2 - a2*b1` that evaluated to zero.
    pub determinant: f64,
}

impl std::fmt::Display for DegenerateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "The determinant is 0, so the system has no unique solution (none or infinitely many).")
    }
}

impl std::error::Error for DegenerateSystem {}
