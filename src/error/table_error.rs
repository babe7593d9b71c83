#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents all validation errors for a trigonometric table request.
pub enum TableError {
    /// The end of the range was smaller than its start.
    EndBeforeStart {
        /// The requested start angle.
        start: f64,
        /// The requested end angle.
        end:   f64,
    },
    /// The step was below the supported minimum (or not a number).
    StepTooSmall {
        /// The requested step.
        step:    f64,
        /// The smallest step the generator accepts.
        minimum: f64,
    },
    /// The range would produce more rows than the generator is willing to
    /// materialize.
    TooManyRows {
        /// The maximum number of rows a single request may produce.
        limit: usize,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndBeforeStart { start, end } => write!(f,
                                                          "Range error: end must be >= start, but found start = {start} and end = {end}."),
            Self::StepTooSmall { step, minimum } => write!(f,
                                                           "Range error: step must be at least {minimum}, but found {step}."),
            Self::TooManyRows { limit } => write!(f,
                                                  "Range error: the range would produce more than {limit} rows."),
        }
    }
}

impl std::error::Error for TableError {}
