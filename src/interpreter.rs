/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic, and dispatches the whitelisted builtin functions. It is the
/// core execution engine of the expression toolbox.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Keeps integer arithmetic exact and checked, promoting to reals only
///   where the semantics require it.
/// - Reports domain errors such as division by zero or invalid factorial
///   arguments.
pub mod evaluator;
/// The lexer module tokenizes an expression string for parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a
/// stream of tokens, each corresponding to a meaningful element such as a
/// number, identifier, operator, or parenthesis. This is the first stage of
/// evaluation, and the token set is closed: unrecognized text is an error.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Handles integer and real literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// expression. The whitelist of functions and constants is enforced here:
/// no AST containing a foreign name is ever returned.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and syntax, reporting errors with position info.
/// - Rejects identifiers outside the whitelist.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during evaluation — integers
/// and reals — and provides methods for safe conversion between them.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Implements safe promotion between numeric types.
pub mod value;
