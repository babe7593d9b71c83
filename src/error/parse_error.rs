#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:    String,
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// An identifier referenced a name outside the whitelist.
    UnknownSymbol {
        /// The rejected identifier.
        name:     String,
        /// The byte offset in the expression where the error occurred.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Syntax error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Syntax error at position {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Syntax error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Syntax error at position {position}: Extra tokens after expression. Check your input: {token}"),

            Self::EmptyExpression => write!(f, "Syntax error: The expression is empty."),

            Self::UnknownSymbol { name, position } => write!(f,
                                                             "Unknown symbol at position {position}: '{name}' is not an allowed name."),
        }
    }
}

impl std::error::Error for ParseError {}
