/// Trigonometric builtins (`sin`, `cos`, `tan`).
pub mod builtin;
/// Permutation and combination builtins (`perm`, `comb`).
pub mod combinatorics;
/// Builtin dispatch: the function table, arity checks, and the whitelist.
pub mod core;
/// The `factorial` builtin.
pub mod factorial;
