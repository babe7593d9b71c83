#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// Referenced an unknown symbolic constant.
    ///
    /// The parser already rejects names outside the whitelist, so this only
    /// occurs for directly-constructed trees.
    UnknownSymbol {
        /// The name of the constant.
        name:     String,
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// Called an unknown function.
    ///
    /// Like [`Self::UnknownSymbol`], this is unreachable through
    /// [`crate::evaluate`] and guards directly-constructed trees.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of arguments the function takes.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// An argument was mathematically invalid for the function.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details:  String,
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// An integer was too large to be represented exactly as a real.
    LiteralTooLarge {
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { name, position } => {
                write!(f, "Error at position {position}: Unknown constant '{name}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at position {position}: Unknown function '{name}'.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          position, } => write!(f,
                                                                "Error at position {position}: {name} takes {expected} argument(s), but {found} were supplied."),
            Self::InvalidArgument { details, position } => {
                write!(f, "Error at position {position}: Invalid argument: {details}.")
            },
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
