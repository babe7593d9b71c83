use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Calculates the number of permutations of *r* items drawn from *n*.
///
/// Both arguments must be non-negative integers with `r <= n`, otherwise
/// an `InvalidArgument` error is returned. The falling product
/// `n * (n-1) * ... * (n-r+1)` uses checked multiplication.
///
/// # Parameters
/// - `args`: Slice containing `[n, r]`.
/// - `position`: Byte offset for error reporting.
///
/// # Returns
/// `Value::Integer` containing `P(n, r)`.
///
/// # Example
/// ```
/// use numbox::interpreter::{evaluator::function::combinatorics::perm, value::Value};
///
/// let result = perm(&[Value::Integer(5), Value::Integer(2)], 1).unwrap();
///
/// assert_eq!(result, Value::Integer(20));
/// ```
pub fn perm(args: &[Value], position: usize) -> EvalResult<Value> {
    let (n, r) = integer_pair("perm", args, position)?;

    let mut result = 1i64;
    for i in (n - r + 1)..=n {
        result = result.checked_mul(i)
                       .ok_or(EvalError::Overflow { position })?;
    }

    Ok(Value::Integer(result))
}

/// Calculates the binomial coefficient of two values, *n* and *r*.
///
/// Both arguments must be non-negative integers with `r <= n`, otherwise
/// an `InvalidArgument` error is returned. The multiplicative formula
/// divides at every step, so each intermediate value is itself a binomial
/// coefficient and stays exact.
///
/// # Parameters
/// - `args`: Slice containing `[n, r]`.
/// - `position`: Byte offset for error reporting.
///
/// # Returns
/// `Value::Integer` containing `C(n, r)`.
///
/// # Example
/// ```
/// use numbox::interpreter::{evaluator::function::combinatorics::comb, value::Value};
///
/// let result = comb(&[Value::Integer(5), Value::Integer(2)], 1).unwrap();
///
/// assert_eq!(result, Value::Integer(10));
/// ```
pub fn comb(args: &[Value], position: usize) -> EvalResult<Value> {
    let (n, r) = integer_pair("comb", args, position)?;

    let r = std::cmp::min(r, n - r);

    let mut result = 1i64;
    for i in 1..=r {
        result = result.checked_mul(n - r + i)
                       .ok_or(EvalError::Overflow { position })?
                 / i;
    }

    Ok(Value::Integer(result))
}

/// Extracts and validates the `(n, r)` argument pair shared by `perm` and
/// `comb`.
///
/// # Errors
/// - Fractional or non-finite arguments.
/// - Negative `n` or `r`.
/// - `r > n`.
fn integer_pair(name: &str, args: &[Value], position: usize) -> EvalResult<(i64, i64)> {
    let n = args[0].as_integer(position)?;
    let r = args[1].as_integer(position)?;

    if n < 0 || r < 0 {
        return Err(EvalError::InvalidArgument { details: format!("{name}(n, r) requires non-negative integers, but found {name}({n}, {r})"),
                                                position });
    }
    if r > n {
        return Err(EvalError::InvalidArgument { details: format!("{name}(n, r) requires r <= n, but found {name}({n}, {r})"),
                                                position });
    }

    Ok((n, r))
}
