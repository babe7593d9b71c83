/// Binary operator parsing.
///
/// Implements the precedence levels for `+ -`, `* /`, and the
/// right-associative `**`, along with the token-to-operator mapping.
pub mod binary;
/// Entry point of the expression grammar.
///
/// Declares the parser result type and the top-level `parse_expression`
/// function that the rest of the crate calls into.
pub mod core;
/// Unary and primary expression parsing.
///
/// Handles unary minus, numeric literals, parenthesized groupings, and the
/// whitelisted symbols and function calls. This is where the whitelist is
/// enforced: any identifier outside it fails to parse.
pub mod unary;
/// Shared parsing helpers.
///
/// Contains the comma-separated-list helper used for function argument
/// lists.
pub mod utils;
