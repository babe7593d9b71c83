use crate::error::{EvalError, ParseError};

/// Classifies an [`EvaluationError`] by the phase that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationErrorKind {
    /// The expression was malformed or referenced a name outside the
    /// whitelist.
    Syntax(ParseError),
    /// The expression was well-formed but mathematically undefined.
    Math(EvalError),
}

/// The error returned by [`crate::evaluate`].
///
/// Every failure carries the original expression string alongside the typed
/// cause, so callers can render the offending input verbatim without keeping
/// any state of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationError {
    /// The expression that failed to evaluate, exactly as supplied.
    pub expression: String,
    /// The typed cause of the failure.
    pub kind:       EvaluationErrorKind,
}

impl EvaluationError {
    /// Wraps a typed failure together with the expression it came from.
    #[must_use]
    pub fn new(expression: &str, kind: EvaluationErrorKind) -> Self {
        Self { expression: expression.to_string(),
               kind }
    }
}

impl std::fmt::Display for EvaluationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Math(e) => write!(f, "{e}"),
        }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to evaluate '{}': {}", self.expression, self.kind)
    }
}

impl std::error::Error for EvaluationError {}

impl From<(&str, ParseError)> for EvaluationError {
    fn from((expression, error): (&str, ParseError)) -> Self {
        Self::new(expression, EvaluationErrorKind::Syntax(error))
    }
}

impl From<(&str, EvalError)> for EvaluationError {
    fn from((expression, error): (&str, EvalError)) -> Self {
        Self::new(expression, EvaluationErrorKind::Math(error))
    }
}
