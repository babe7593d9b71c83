use numbox::{
    Value,
    error::{EvalError, EvaluationErrorKind, ParseError},
    evaluate,
};

fn assert_integer(expression: &str, expected: i64) {
    match evaluate(expression) {
        Ok(Value::Integer(value)) => {
            assert_eq!(value, expected, "'{expression}' evaluated to {value}")
        },
        other => panic!("'{expression}' did not evaluate to an integer: {other:?}"),
    }
}

fn assert_real(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(Value::Real(value)) => {
            assert!((value - expected).abs() < 1e-12,
                    "'{expression}' evaluated to {value}, expected {expected}")
        },
        other => panic!("'{expression}' did not evaluate to a real: {other:?}"),
    }
}

fn assert_syntax_error(expression: &str) -> ParseError {
    match evaluate(expression) {
        Err(e) => match e.kind {
            EvaluationErrorKind::Syntax(parse_error) => parse_error,
            EvaluationErrorKind::Math(math_error) => {
                panic!("'{expression}' failed during evaluation instead of parsing: {math_error:?}")
            },
        },
        Ok(value) => panic!("'{expression}' succeeded with {value:?} but was expected to fail"),
    }
}

fn assert_math_error(expression: &str) -> EvalError {
    match evaluate(expression) {
        Err(e) => match e.kind {
            EvaluationErrorKind::Math(math_error) => math_error,
            EvaluationErrorKind::Syntax(parse_error) => {
                panic!("'{expression}' failed during parsing instead of evaluation: {parse_error:?}")
            },
        },
        Ok(value) => panic!("'{expression}' succeeded with {value:?} but was expected to fail"),
    }
}

#[test]
fn basic_arithmetic_and_precedence() {
    assert_integer("2 + 3 * 4", 14);
    assert_integer("(2 + 3) * 4", 20);
    assert_integer("8 - 5", 3);
    assert_integer("7 * 9", 63);
    assert_integer("1 + 2 - 3 + 4", 4);
}

#[test]
fn division_always_produces_reals() {
    assert_real("10 / 2", 5.0);
    assert_real("10 / 4", 2.5);
    assert_real("1 / 3", 1.0 / 3.0);
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(assert_math_error("5 / 0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(assert_math_error("5.0 / 0.0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(assert_math_error("1 / (2 - 2)"), EvalError::DivisionByZero { .. }));
}

#[test]
fn exponentiation() {
    assert_integer("2 ** 10", 1024);
    assert_integer("2 ** 0", 1);
    assert_real("2 ** -3", 0.125);
    assert_real("2 ** 0.5", 2.0_f64.sqrt());
    assert_real("4.0 ** 2", 16.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_integer("2 ** 3 ** 2", 512);
}

#[test]
fn unary_minus_binds_below_exponentiation() {
    assert_integer("-2 ** 2", -4);
    assert_integer("(-2) ** 2", 4);
    assert_integer("--5", 5);
}

#[test]
fn integer_overflow_is_an_error() {
    assert!(matches!(assert_math_error("9223372036854775807 + 1"), EvalError::Overflow { .. }));
    assert!(matches!(assert_math_error("2 ** 9999"), EvalError::Overflow { .. }));
}

#[test]
fn factorial() {
    assert_integer("factorial(0)", 1);
    assert_integer("factorial(1)", 1);
    assert_integer("factorial(5)", 120);
    assert_integer("factorial(10)", 3_628_800);

    assert!(matches!(assert_math_error("factorial(-1)"), EvalError::InvalidArgument { .. }));
    assert!(matches!(assert_math_error("factorial(2.5)"), EvalError::InvalidArgument { .. }));
    assert!(matches!(assert_math_error("factorial(21)"), EvalError::Overflow { .. }));
}

#[test]
fn permutations_and_combinations() {
    assert_integer("perm(5, 2)", 20);
    assert_integer("perm(5, 0)", 1);
    assert_integer("perm(5, 5)", 120);
    assert_integer("comb(5, 2)", 10);
    assert_integer("comb(52, 5)", 2_598_960);

    assert!(matches!(assert_math_error("comb(2, 5)"), EvalError::InvalidArgument { .. }));
    assert!(matches!(assert_math_error("perm(-1, 0)"), EvalError::InvalidArgument { .. }));
    assert!(matches!(assert_math_error("comb(5, 1.5)"), EvalError::InvalidArgument { .. }));
}

#[test]
fn wrong_argument_counts_are_rejected() {
    assert!(matches!(assert_math_error("factorial(1, 2)"),
                     EvalError::ArgumentCountMismatch { .. }));
    assert!(matches!(assert_math_error("comb(5)"), EvalError::ArgumentCountMismatch { .. }));
    assert!(matches!(assert_math_error("sin()"), EvalError::ArgumentCountMismatch { .. }));
}

#[test]
fn trigonometric_functions_and_pi() {
    assert_real("sin(0)", 0.0);
    assert_real("sin(pi / 2)", 1.0);
    assert_real("cos(0)", 1.0);
    assert_real("cos(pi)", -1.0);
    assert_real("tan(0)", 0.0);
    assert_real("pi", std::f64::consts::PI);
    assert_real("2 * pi", std::f64::consts::TAU);
}

#[test]
fn mixed_integer_real_arithmetic_promotes() {
    assert_real("1 + 2.5", 3.5);
    assert_real("2.0 * 3", 6.0);
    assert_real("1.5 - 0.5", 1.0);
}

#[test]
fn identifiers_outside_the_whitelist_never_resolve() {
    assert!(matches!(assert_syntax_error("import os"), ParseError::UnknownSymbol { .. }));
    assert!(matches!(assert_syntax_error("__builtins__"), ParseError::UnknownSymbol { .. }));
    assert!(matches!(assert_syntax_error("open(1)"), ParseError::UnknownSymbol { .. }));
    assert!(matches!(assert_syntax_error("e"), ParseError::UnknownSymbol { .. }));
    assert!(matches!(assert_syntax_error("x + 1"), ParseError::UnknownSymbol { .. }));
}

#[test]
fn malformed_expressions_are_syntax_errors() {
    assert!(matches!(assert_syntax_error(""), ParseError::EmptyExpression));
    assert!(matches!(assert_syntax_error("   "), ParseError::EmptyExpression));
    assert!(matches!(assert_syntax_error("2 +"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_syntax_error("(2 + 3"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(assert_syntax_error("2 3"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(assert_syntax_error("* 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_syntax_error("2 @ 3"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn errors_carry_the_original_expression() {
    let error = evaluate("5 / 0").unwrap_err();
    assert_eq!(error.expression, "5 / 0");
    assert!(error.to_string().contains("5 / 0"));
}

#[test]
fn evaluation_is_stateless() {
    assert!(evaluate("x + 1").is_err());
    // A failed evaluation leaves nothing behind that could affect the next.
    assert_integer("1 + 1", 2);
    assert_integer("1 + 1", 2);
}
