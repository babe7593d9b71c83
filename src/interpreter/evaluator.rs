/// Binary operation evaluation.
///
/// Implements the numeric semantics of `+ - * /` and `**`: checked integer
/// arithmetic with overflow reporting, promotion to reals for mixed
/// operands, and the division-by-zero guards.
pub mod binary;
/// The core tree-walking evaluator.
///
/// Walks an [`crate::ast::Expr`] bottom-up and computes its
/// [`crate::interpreter::value::Value`]. Evaluation is a pure function of
/// the tree: there is no context, no variable store, and no state carried
/// between invocations.
pub mod core;
/// The whitelisted builtin functions.
///
/// Declares the dispatch table and the implementations of `factorial`,
/// `perm`, `comb`, and the trigonometric functions. The table doubles as
/// the function whitelist the parser checks against.
pub mod function;
