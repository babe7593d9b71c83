/// Evaluation (domain) errors.
///
/// Contains all error types that can be raised while evaluating a
/// well-formed expression tree. Domain errors cover mathematically undefined
/// operations such as division by zero, invalid factorial or combinatorics
/// arguments, and integer overflow.
pub mod eval_error;
/// The top-level error returned by [`crate::evaluate`].
///
/// Wraps a parse or evaluation failure together with the original expression
/// string, so a caller can always present the offending input alongside the
/// message.
pub mod evaluation_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include syntax mistakes, unbalanced parentheses,
/// trailing tokens, and references to identifiers outside the whitelist.
pub mod parse_error;
/// Linear system degeneracy.
///
/// Defines the error reported when a 2x2 linear system has a zero
/// determinant and therefore no unique solution.
pub mod solve_error;
/// Trigonometric table range errors.
///
/// Defines the validation errors for table requests: inverted ranges, steps
/// below the supported minimum, and ranges that would produce an unbounded
/// number of rows.
pub mod table_error;

pub use eval_error::EvalError;
pub use evaluation_error::{EvaluationError, EvaluationErrorKind};
pub use parse_error::ParseError;
pub use solve_error::DegenerateSystem;
pub use table_error::TableError;
