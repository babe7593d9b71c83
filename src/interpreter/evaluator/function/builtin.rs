use crate::interpreter::{evaluator::core::EvalResult, value::Value};

/// Applies a unary trigonometric builtin to a numeric value.
///
/// The generated functions accept exactly one argument in radians.
/// Integers are converted to real numbers before applying the real
/// function, and the result is always a real.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `position`: Byte offset for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use numbox::interpreter::{evaluator::function::builtin::sin, value::Value};
///
/// let x = Value::Real(std::f64::consts::PI / 2.0);
/// let r = sin(&[x], 1).unwrap();
///
/// assert_eq!(r, Value::Real(1.0));
/// ```
macro_rules! trig_builtin {
    ($fname:ident) => {
        pub fn $fname(args: &[Value], position: usize) -> EvalResult<Value> {
            Ok(Value::Real(args[0].as_real(position)?.$fname()))
        }
    };
}

trig_builtin!(sin);
trig_builtin!(cos);
trig_builtin!(tan);
