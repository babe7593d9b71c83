use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_INT`] in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use numbox::util::num::{MAX_SAFE_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside the safe range
/// let big = MAX_SAFE_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range,
/// and not fractional.
///
/// ## Errors
/// Returns an `InvalidArgument` error for non-finite, out-of-range, or
/// fractional values.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
/// - `position`: Byte offset in the expression for error reporting.
///
/// # Returns
/// - `Ok(i64)`: The converted value if safe.
/// - `Err(EvalError::InvalidArgument)`: If conversion would lose data.
///
/// # Example
/// ```
/// use numbox::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0, 1).unwrap(), 1000);
/// assert!(f64_to_i64_checked(1.5, 123).is_err());
/// assert!(f64_to_i64_checked(1e20, 5).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, position: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(EvalError::InvalidArgument { details: format!("cannot use non-finite value {value} as an integer"),
                                                position });
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(EvalError::InvalidArgument { details: format!("{value} is too large to be used as an integer"),
                                                position });
    }
    if value.fract() != 0.0 {
        return Err(EvalError::InvalidArgument { details: format!("{value} is fractional where an integer is required"),
                                                position });
    }
    Ok(value as i64)
}
