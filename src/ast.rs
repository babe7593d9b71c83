/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// an expression string: integers and real numbers. It is used in the AST to
/// represent literal expressions and as a convenient container for constants
/// during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` covers every construct of the restricted expression language:
/// literals, the whitelisted symbolic constants, unary negation, binary
/// arithmetic, and calls to whitelisted functions. Each variant carries the
/// byte offset of the construct in the original expression string for error
/// reporting.
///
/// The grammar is closed: there is no variable binding, no member access, and
/// no way to reference anything outside the whitelist, so evaluating an
/// `Expr` can never reach a foreign symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Byte offset in the expression string.
        position: usize,
    },
    /// Reference to a whitelisted symbolic constant such as `pi`.
    Symbol {
        /// Name of the constant.
        name:     String,
        /// Byte offset in the expression string.
        position: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the expression string.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset in the expression string.
        position: usize,
    },
    /// A call to a whitelisted function (e.g. `factorial(5)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Byte offset in the expression string.
        position:  usize,
    },
}

impl Expr {
    /// Gets the byte offset from `self`.
    /// ## Example
    /// ```
    /// use numbox::ast::Expr;
    ///
    /// let expr = Expr::Symbol { name:     "pi".to_string(),
    ///                           position: 4, };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Symbol { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Represents a binary operator of the expression language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary operator of the expression language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}
