use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{builtin, combinatorics, factorial},
        },
        value::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the byte
/// offset of the call. It returns a value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments the builtin takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names — the function
///   whitelist the parser enforces).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"       => { arity: 1, func: builtin::sin },
    "cos"       => { arity: 1, func: builtin::cos },
    "tan"       => { arity: 1, func: builtin::tan },
    "factorial" => { arity: 1, func: factorial::factorial },
    "perm"      => { arity: 2, func: combinatorics::perm },
    "comb"      => { arity: 2, func: combinatorics::comb },
}

/// Evaluates a builtin function call.
///
/// The name is looked up in the builtin table; the arity is verified and
/// the builtin executed. There are no user-defined functions in this
/// language, so an unknown name is an error.
///
/// # Parameters
/// - `name`: Function name.
/// - `args`: Evaluated argument values.
/// - `position`: Byte offset for error reporting.
///
/// # Returns
/// The function result or an error if lookup or arity fails.
pub fn eval_function(name: &str, args: &[Value], position: usize) -> EvalResult<Value> {
    let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
        return Err(EvalError::UnknownFunction { name: name.to_string(),
                                                position });
    };

    if args.len() != builtin.arity {
        return Err(EvalError::ArgumentCountMismatch { name: name.to_string(),
                                                      expected: builtin.arity,
                                                      found: args.len(),
                                                      position });
    }

    (builtin.func)(args, position)
}

/// Tests whether a name is a whitelisted builtin function.
///
/// # Example
/// ```
/// use numbox::interpreter::evaluator::function::core::is_builtin_function;
///
/// assert!(is_builtin_function("sin"));
/// assert!(!is_builtin_function("eval"));
/// ```
#[must_use]
pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}
