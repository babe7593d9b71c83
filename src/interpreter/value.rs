use crate::{
    ast::LiteralValue,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Represents a runtime value produced by the evaluator.
///
/// Integer literals that stay integer through the whole computation are kept
/// as `Integer`; any operation that leaves the integers (division, trig,
/// `pi`, a fractional or negative exponent) produces a `Real`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `position`: Byte offset in the expression for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real or a safe integer.
    /// - `Err(EvalError::LiteralTooLarge)`: If the integer is not exactly
    ///   representable.
    ///
    /// # Example
    /// ```
    /// use numbox::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => {
                i64_to_f64_checked(*n, EvalError::LiteralTooLarge { position })
            },
        }
    }
    /// Converts the value to an `i64`, performing safe conversion if
    /// necessary.
    ///
    /// - Accepts `Value::Integer` directly.
    /// - Converts `Value::Real` to `i64` if the value is finite, within the
    ///   `i64` range, and not fractional (so `factorial(5.0)` works while
    ///   `factorial(5.5)` is rejected).
    ///
    /// # Parameters
    /// - `position`: Byte offset in the expression for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value if conversion is lossless.
    /// - `Err(EvalError::InvalidArgument)`: If the value is fractional or
    ///   out of range.
    ///
    /// # Example
    /// ```
    /// use numbox::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(42).as_integer(1).unwrap(), 42);
    /// assert_eq!(Value::Real(10.0).as_integer(1).unwrap(), 10);
    /// assert!(Value::Real(1.23).as_integer(1).is_err());
    /// ```
    pub fn as_integer(&self, position: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Real(r) => f64_to_i64_checked(*r, position),
        }
    }
    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(n) => (*n).into(),
        }
    }
}
