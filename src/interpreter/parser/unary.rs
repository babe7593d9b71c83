use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::{core::CONSTANTS, function::core::is_builtin_function},
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the single prefix operator `-` (numeric negation), which is
/// right-associative: `--x` parses as `-(-x)`.
///
/// Negation binds looser than `**`, so `-2 ** 2` is `-(2 ** 2)`. If no
/// operator is present, the function delegates to [`parse_exponent`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           position })
    } else {
        parse_exponent(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - whitelisted constants (`pi`)
/// - whitelisted function calls
/// - parenthesized expressions
///
/// This function does not handle unary or binary operators.
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | symbol_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Real(..) | Token::Integer(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_symbol_or_call(tokens),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                             position: *position, }),
    }
}

/// Parses a numeric literal.
///
/// Supported forms include integer literals (`42`) and real literals
/// (`3.14`, `.5`, `2.`, `2.1e-10`). Signs are not part of the literal;
/// they are handled by [`parse_unary`].
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), position)) => Ok(Expr::Literal { value:    (*n).into(),
                                                                  position: *position, }),
        Some((Token::Real(n), position)) => Ok(Expr::Literal { value:    (*n).into(),
                                                               position: *position, }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = match tokens.next() {
        Some((_, position)) => *position,
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    };
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses a whitelisted constant or function call.
///
/// Supported forms:
///
/// - `pi`
/// - `factorial(n)`, `perm(n, r)`, `comb(n, r)`, `sin(x)`, `cos(x)`,
///   `tan(x)`
///
/// The whitelist is enforced here, before any AST is returned: an
/// identifier that is not a whitelisted function (when followed by `(`) or
/// a whitelisted constant (otherwise) produces
/// [`ParseError::UnknownSymbol`]. This is the security boundary of the
/// evaluator — nothing outside the whitelist survives parsing, so
/// evaluation can never resolve a foreign name.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Symbol`] for a whitelisted constant.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is not in the whitelist,
/// - function-call arguments fail to parse,
/// - the closing `)` is missing.
fn parse_symbol_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                     position: *position, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { position: 0 });
        },
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            if !is_builtin_function(&name) {
                return Err(ParseError::UnknownSymbol { name, position });
            }
            tokens.next();
            let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::FunctionCall { name,
                                    arguments: args,
                                    position })
        },
        _ => {
            if !CONSTANTS.contains(&name.as_str()) {
                return Err(ParseError::UnknownSymbol { name, position });
            }
            Ok(Expr::Symbol { name, position })
        },
    }
}
