use crate::{
    ast::{Expr, UnaryOperator},
    error::EvalError,
    interpreter::{
        evaluator::{binary::eval_binary_op, function::core::eval_function},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The whitelisted symbolic constants.
pub const CONSTANTS: &[&str] = &["pi"];

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for expression evaluation.
/// The evaluator dispatches based on expression variant: literals,
/// whitelisted constants, unary negation, binary operations, and builtin
/// function calls. It holds no state, so re-evaluating the same tree always
/// produces the same value.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The computed [`Value`].
///
/// # Errors
/// Returns an [`EvalError`] for mathematically undefined operations such as
/// division by zero, invalid factorial or combinatorics arguments, and
/// integer overflow.
///
/// # Example
/// ```
/// use numbox::{
///     ast::Expr,
///     interpreter::{evaluator::core::eval, value::Value},
/// };
///
/// let expr = Expr::Literal { value:    10.into(),
///                            position: 0, };
///
/// assert_eq!(eval(&expr).unwrap(), Value::Integer(10));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(Value::from(value)),
        Expr::Symbol { name, position } => eval_symbol(name, *position),
        Expr::UnaryOp { op, expr, position } => eval_unary_op(*op, expr, *position),
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_binary_op(left, *op, right, *position)
        },
        Expr::FunctionCall { name,
                             arguments,
                             position, } => {
            let args = arguments.iter().map(eval).collect::<Result<Vec<_>, _>>()?;
            eval_function(name, &args, *position)
        },
    }
}

/// Resolves a whitelisted symbolic constant.
///
/// `pi` is the only constant; its value is always a real. Any other name
/// is rejected — the parser never produces one, but `Expr` is a public
/// type, so directly-constructed trees are still checked.
///
/// # Parameters
/// - `name`: Constant name.
/// - `position`: Byte offset for error reporting.
///
/// # Returns
/// The constant's value, or `EvalError::UnknownSymbol`.
fn eval_symbol(name: &str, position: usize) -> EvalResult<Value> {
    match name {
        "pi" => Ok(Value::Real(std::f64::consts::PI)),
        _ => Err(EvalError::UnknownSymbol { name: name.to_string(),
                                            position }),
    }
}

/// Evaluates a unary operation.
///
/// Negation keeps integers integer, using checked arithmetic so that
/// negating `i64::MIN` reports an overflow instead of wrapping.
///
/// # Parameters
/// - `op`: The unary operator.
/// - `expr`: The operand expression.
/// - `position`: Byte offset for error reporting.
///
/// # Returns
/// The negated value.
fn eval_unary_op(op: UnaryOperator, expr: &Expr, position: usize) -> EvalResult<Value> {
    let value = eval(expr)?;
    match op {
        UnaryOperator::Negate => match value {
            Value::Integer(n) => n.checked_neg()
                                  .map(Value::Integer)
                                  .ok_or(EvalError::Overflow { position }),
            Value::Real(r) => Ok(Value::Real(-r)),
        },
    }
}
