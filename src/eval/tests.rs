//! Unit tests for the constant evaluator.

use super::evaluator::Evaluator;
use crate::{
    ast::ast::Expr,
    lexer::tokens::{Token, TokenKind},
    parser::parser::parse_source,
    value::Value,
};

fn eval(source: &str) -> Value {
    let expr = parse_source(source, None).unwrap();
    Evaluator.evaluate(&expr).unwrap()
}

fn eval_error(source: &str) -> (String, u32) {
    let expr = parse_source(source, None).unwrap();
    let error = Evaluator.evaluate(&expr).unwrap_err();
    (error.get_error_name().to_string(), error.get_position().0)
}

#[test]
fn test_eval_arithmetic() {
    assert_eq!(eval("3 + 4"), Value::Number(7.0));
    assert_eq!(eval("-5"), Value::Number(-5.0));
    assert_eq!(eval("(1 + 2) * 3"), Value::Number(9.0));
    assert_eq!(eval("10 / 4 - 1"), Value::Number(1.5));
    assert_eq!(eval("1 / 0"), Value::Number(f64::INFINITY));
}

#[test]
fn test_eval_comparison_and_equality() {
    assert_eq!(eval("1 < 2"), Value::Boolean(true));
    assert_eq!(eval("2 <= 1"), Value::Boolean(false));
    assert_eq!(eval("3 >= 3"), Value::Boolean(true));
    assert_eq!(eval("1 == 1"), Value::Boolean(true));
    assert_eq!(eval("\"a\" == \"a\""), Value::Boolean(true));
    assert_eq!(eval("nil == false"), Value::Boolean(false));
    assert_eq!(eval("1 != \"1\""), Value::Boolean(true));
}

#[test]
fn test_eval_strings() {
    assert_eq!(eval("\"foo\" + \"bar\""), Value::from("foobar"));
}

#[test]
fn test_eval_not() {
    assert_eq!(eval("!nil"), Value::Boolean(true));
    assert_eq!(eval("!0"), Value::Boolean(false));
    assert_eq!(eval("!!\"\""), Value::Boolean(true));
}

#[test]
fn test_eval_logical_short_circuit() {
    assert_eq!(eval("true or false"), Value::Boolean(true));
    assert_eq!(eval("nil or \"fallback\""), Value::from("fallback"));
    assert_eq!(eval("false and 1"), Value::Boolean(false));
    assert_eq!(eval("1 and 2"), Value::Number(2.0));

    // The right operand is never reached, so its error never surfaces
    assert_eq!(eval("true or x"), Value::Boolean(true));
    assert_eq!(eval("nil and f()"), Value::Nil);
}

#[test]
fn test_eval_operand_errors() {
    assert_eq!(eval_error("-\"a\""), ("OperandTypeError".to_string(), 0));
    assert_eq!(eval_error("1 + \"a\""), ("OperandTypeError".to_string(), 2));
    assert_eq!(eval_error("true * 2"), ("OperandTypeError".to_string(), 5));
    assert_eq!(eval_error("nil < 1"), ("OperandTypeError".to_string(), 4));
}

#[test]
fn test_eval_not_constant() {
    assert_eq!(eval_error("x"), ("NotConstant".to_string(), 0));
    assert_eq!(eval_error("x = 1"), ("NotConstant".to_string(), 0));
    assert_eq!(eval_error("obj.field"), ("NotConstant".to_string(), 4));
    assert_eq!(eval_error("obj.field = 1"), ("NotConstant".to_string(), 4));
    assert_eq!(eval_error("this"), ("NotConstant".to_string(), 0));
    assert_eq!(eval_error("super.m"), ("NotConstant".to_string(), 0));
    // Calls report at the closing parenthesis
    assert_eq!(eval_error("f(1, 2)"), ("NotConstant".to_string(), 6));
    assert_eq!(eval_error("1 + y"), ("NotConstant".to_string(), 4));
}

#[test]
fn test_eval_rejects_foreign_operators() {
    let expr = Expr::binary(
        Expr::literal(1.0),
        Token::synthetic(TokenKind::Comma, ","),
        Expr::literal(2.0),
    );
    let error = Evaluator.evaluate(&expr).unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");

    let expr = Expr::unary(Token::synthetic(TokenKind::Plus, "+"), Expr::literal(2.0));
    assert!(Evaluator.evaluate(&expr).is_err());

    let expr = Expr::logical(
        Expr::literal(true),
        Token::synthetic(TokenKind::Plus, "+"),
        Expr::literal(2.0),
    );
    let error = Evaluator.evaluate(&expr).unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}
