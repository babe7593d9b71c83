use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary operation on two values.
///
/// Numeric semantics:
/// - `+ - *` keep two integers integer, using checked arithmetic
///   (`EvalError::Overflow` instead of wrapping); mixed operands are
///   promoted to reals.
/// - `/` always produces a real; a zero divisor of either representation
///   is `EvalError::DivisionByZero`, never infinity.
/// - `**` keeps an integer base with a non-negative integer exponent
///   integer (checked); a negative or real exponent switches to real
///   arithmetic, and a zero base with a negative exponent is a division by
///   zero.
///
/// # Parameters
/// - `left`: Left operand.
/// - `op`: The operator.
/// - `right`: Right operand.
/// - `position`: Byte offset for error reporting.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use numbox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary_op, value::Value},
/// };
///
/// let v = eval_binary_op(Value::Integer(2),
///                        BinaryOperator::Pow,
///                        Value::Integer(10),
///                        0).unwrap();
///
/// assert_eq!(v, Value::Integer(1024));
/// ```
pub fn eval_binary_op(left: Value,
                      op: BinaryOperator,
                      right: Value,
                      position: usize)
                      -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => eval_additive_op(left, right, i64::checked_add, |a, b| a + b, position),
        BinaryOperator::Sub => eval_additive_op(left, right, i64::checked_sub, |a, b| a - b, position),
        BinaryOperator::Mul => eval_additive_op(left, right, i64::checked_mul, |a, b| a * b, position),
        BinaryOperator::Div => eval_division(left, right, position),
        BinaryOperator::Pow => eval_power(left, right, position),
    }
}

/// Applies an integer-preserving arithmetic operator.
///
/// Two integers use the checked integer operation; any real operand
/// promotes both sides to reals.
fn eval_additive_op(left: Value,
                    right: Value,
                    int_op: fn(i64, i64) -> Option<i64>,
                    real_op: fn(f64, f64) -> f64,
                    position: usize)
                    -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => int_op(a, b).map(Value::Integer)
                                                              .ok_or(EvalError::Overflow { position }),
        _ => Ok(Value::Real(real_op(left.as_real(position)?, right.as_real(position)?))),
    }
}

/// Evaluates a division.
///
/// The result is always a real, even for evenly dividing integers
/// (`10 / 2` is `5.0`). A zero divisor is reported as a domain error.
fn eval_division(left: Value, right: Value, position: usize) -> EvalResult<Value> {
    let divisor = right.as_real(position)?;
    if divisor == 0.0 {
        return Err(EvalError::DivisionByZero { position });
    }
    Ok(Value::Real(left.as_real(position)? / divisor))
}

/// Evaluates an exponentiation.
///
/// An integer base with a non-negative integer exponent stays integer via
/// `checked_pow`; exponents that do not fit `u32` are reported as
/// overflow. Everything else goes through `f64::powf`.
fn eval_power(left: Value, right: Value, position: usize) -> EvalResult<Value> {
    if let (Value::Integer(base), Value::Integer(exponent)) = (left, right) {
        if exponent >= 0 {
            let exponent =
                u32::try_from(exponent).map_err(|_| EvalError::Overflow { position })?;
            return base.checked_pow(exponent)
                       .map(Value::Integer)
                       .ok_or(EvalError::Overflow { position });
        }
        if base == 0 {
            return Err(EvalError::DivisionByZero { position });
        }
    }

    let base = left.as_real(position)?;
    let exponent = right.as_real(position)?;
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero { position });
    }
    Ok(Value::Real(base.powf(exponent)))
}
