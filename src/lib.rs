//! # numbox
//!
//! numbox is a small numeric toolbox written in Rust.
//! It offers three independent, stateless utilities: a sandboxed arithmetic
//! expression evaluator, a 2x2 linear system solver, and a trigonometric
//! value table generator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::{EvaluationError, ParseError},
    interpreter::{evaluator::core::eval, lexer::Token, parser::core::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an arithmetic expression as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for every construct of the restricted grammar.
/// - Attaches byte offsets to AST nodes for error reporting.
/// - Guarantees by construction that no node references anything outside the
///   whitelist.
pub mod ast;
/// Provides unified error types for all three utilities.
///
/// This module defines every error the toolbox can return: syntax and
/// whitelist violations from the parser, domain errors from the evaluator,
/// degeneracy from the linear solver, and range validation failures from the
/// table generator. All errors are values — nothing in the core panics on
/// user input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches positions and detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, and value
/// representations to provide the sandboxed expression evaluator. The
/// whitelist of callable names is enforced by the parser, so evaluation is
/// an explicit, testable contract rather than a runtime sandboxing trick.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Solves 2x2 linear systems.
///
/// Implements Cramer's rule with explicit degeneracy detection: a zero
/// determinant is reported as a typed error, never a crash or an infinity.
pub mod solver;
/// Generates trigonometric value tables.
///
/// Produces ordered angle/sin/cos/tan rows over a range or for a single
/// angle, in degrees or radians, with singular tangents reported as
/// undefined rather than overflowing.
pub mod trig;
/// General utilities for safe numeric conversion.
///
/// Provides checked conversions between integer and floating-point types
/// without silent data loss.
pub mod util;

pub use crate::{
    interpreter::value::Value,
    solver::{LinearSystem2x2, SolutionPoint},
    trig::{AngleUnit, TrigRequest, TrigRow},
};

/// Evaluates an arithmetic expression string.
///
/// The expression is tokenized, parsed against the closed grammar, and the
/// resulting tree evaluated. Only the whitelisted operators, functions
/// (`factorial`, `perm`, `comb`, `sin`, `cos`, `tan`) and the constant `pi`
/// are accepted; any other identifier fails before evaluation, so no
/// external symbol can ever be resolved or executed.
///
/// The call is a pure function of its input: no state is kept between
/// invocations, and the same expression always produces the same result.
///
/// # Errors
/// Returns an [`EvaluationError`] carrying the original expression and the
/// typed cause — a syntax or whitelist violation, or a mathematically
/// undefined operation.
///
/// # Examples
/// ```
/// use numbox::{Value, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Value::Integer(14));
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), Value::Integer(20));
/// assert_eq!(evaluate("2 ** 10").unwrap(), Value::Integer(1024));
///
/// // Division by zero is a typed error, not infinity.
/// assert!(evaluate("5 / 0").is_err());
///
/// // Identifiers outside the whitelist never resolve.
/// assert!(evaluate("import os").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<Value, EvaluationError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let slice = lexer.slice();
            return Err((expression,
                        ParseError::UnexpectedToken { token:    slice.to_string(),
                                                      position: lexer.span().start, })
                .into());
        }
    }

    if tokens.is_empty() {
        return Err((expression, ParseError::EmptyExpression).into());
    }

    let mut iter = tokens.iter().peekable();
    let expr = match parse_expression(&mut iter) {
        Ok(expr) => expr,
        Err(e) => return Err((expression, e).into()),
    };

    if let Some((tok, position)) = iter.next() {
        return Err((expression,
                    ParseError::UnexpectedTrailingTokens { token:    format!("{tok:?}"),
                                                           position: *position, })
            .into());
    }

    match eval(&expr) {
        Ok(value) => Ok(value),
        Err(e) => Err((expression, e).into()),
    }
}

/// Solves a 2x2 linear system by Cramer's rule.
///
/// A zero determinant (exact comparison) is reported as
/// [`error::DegenerateSystem`].
///
/// # Errors
/// Returns [`error::DegenerateSystem`] when the system has no unique
/// solution.
///
/// # Examples
/// ```
/// use numbox::{LinearSystem2x2, solve_linear_system};
///
/// // x + y = 3, x - y = 1  =>  x = 2, y = 1
/// let solution =
///     solve_linear_system(&LinearSystem2x2::new(1.0, 1.0, 3.0, 1.0, -1.0, 1.0)).unwrap();
/// assert_eq!((solution.x, solution.y), (2.0, 1.0));
///
/// // Linearly dependent rows have no unique solution.
/// assert!(solve_linear_system(&LinearSystem2x2::new(1.0, 1.0, 0.0, 1.0, 1.0, 0.0)).is_err());
/// ```
pub fn solve_linear_system(system: &LinearSystem2x2)
                           -> Result<SolutionPoint, error::DegenerateSystem> {
    solver::solve(system)
}

/// Generates a trigonometric value table for a range or a single angle.
///
/// # Errors
/// Returns a [`error::TableError`] for inverted ranges, steps below the
/// supported minimum, or ranges that would produce an unbounded number of
/// rows.
///
/// # Examples
/// ```
/// use numbox::{AngleUnit, TrigRequest, generate_trig_table};
///
/// let rows = generate_trig_table(&TrigRequest::Range { start: 0.0,
///                                                      end:   90.0,
///                                                      step:  15.0, },
///                                AngleUnit::Degrees).unwrap();
///
/// assert_eq!(rows.len(), 7);
/// assert!(rows[6].tan.is_none()); // tan(90°) is singular
/// ```
pub fn generate_trig_table(request: &TrigRequest,
                           unit: AngleUnit)
                           -> Result<Vec<TrigRow>, error::TableError> {
    trig::generate(request, unit)
}
