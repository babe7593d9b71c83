use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Calculates the factorial of a non-negative integer.
///
/// The argument must be integral (an integral real such as `5.0` is
/// accepted) and non-negative; anything else is an `InvalidArgument`
/// error. The product uses checked multiplication, so values past `20!`
/// report an overflow instead of wrapping.
///
/// # Parameters
/// - `args`: Slice containing `[n]`.
/// - `position`: Byte offset for error reporting.
///
/// # Returns
/// `Value::Integer` containing `n!`.
///
/// # Example
/// ```
/// use numbox::interpreter::{evaluator::function::factorial::factorial, value::Value};
///
/// let result = factorial(&[Value::Integer(5)], 1).unwrap();
///
/// assert_eq!(result, Value::Integer(120));
/// ```
pub fn factorial(args: &[Value], position: usize) -> EvalResult<Value> {
    let n = args[0].as_integer(position)?;

    if n < 0 {
        return Err(EvalError::InvalidArgument { details: format!("factorial(n) requires n >= 0, but found factorial({n})"),
                                                position });
    }

    let mut result = 1i64;
    for i in 2..=n {
        result = result.checked_mul(i)
                       .ok_or(EvalError::Overflow { position })?;
    }

    Ok(Value::Integer(result))
}
