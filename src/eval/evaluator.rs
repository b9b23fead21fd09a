use tracing::{debug, trace};

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignExpr, BinaryExpr, CallExpr, GetExpr, GroupingExpr, LiteralExpr, LogicalExpr,
            SetExpr, SuperExpr, ThisExpr, UnaryExpr, VariableExpr,
        },
        visitor::ExprVisitor,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    value::Value,
};

/// Evaluates expressions that need no running program: literals, grouping,
/// unary, binary and logical operators.
///
/// Anything that reads or writes state (variables, calls, properties,
/// `this`, `super`) is rejected with `NotConstant`, positioned at the token
/// the node keeps for error reporting.
#[derive(Debug, Default)]
pub struct Evaluator;

pub type EvalResult = Result<Value, Error>;

impl Evaluator {
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        let value = expr.accept(self);
        trace!(?value, "evaluated");
        value
    }

    fn not_constant(what: String, token: &Token) -> EvalResult {
        debug!(what = %what, "refusing to evaluate");
        Err(Error::new(
            ErrorImpl::NotConstant { what },
            token.span.start.clone(),
        ))
    }
}

fn operand_error(operator: &Token, expected: &str) -> Error {
    Error::new(
        ErrorImpl::OperandTypeError {
            operator: operator.value.clone(),
            expected: expected.to_string(),
        },
        operator.span.start.clone(),
    )
}

fn numbers(operator: &Token, left: &Value, right: &Value) -> Result<(f64, f64), Error> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
        _ => Err(operand_error(operator, "numbers")),
    }
}

impl ExprVisitor<EvalResult> for Evaluator {
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> EvalResult {
        let left = expr.left().accept(self)?;
        let right = expr.right().accept(self)?;
        let operator = expr.operator();

        let value = match operator.kind {
            TokenKind::Plus => match (&left, &right) {
                (Value::Number(l), Value::Number(r)) => Value::Number(l + r),
                (Value::String(l), Value::String(r)) => Value::String(format!("{}{}", l, r)),
                _ => return Err(operand_error(operator, "two numbers or two strings")),
            },
            TokenKind::Dash => {
                let (l, r) = numbers(operator, &left, &right)?;
                Value::Number(l - r)
            }
            TokenKind::Star => {
                let (l, r) = numbers(operator, &left, &right)?;
                Value::Number(l * r)
            }
            TokenKind::Slash => {
                let (l, r) = numbers(operator, &left, &right)?;
                Value::Number(l / r)
            }
            TokenKind::Less => {
                let (l, r) = numbers(operator, &left, &right)?;
                Value::Boolean(l < r)
            }
            TokenKind::LessEquals => {
                let (l, r) = numbers(operator, &left, &right)?;
                Value::Boolean(l <= r)
            }
            TokenKind::Greater => {
                let (l, r) = numbers(operator, &left, &right)?;
                Value::Boolean(l > r)
            }
            TokenKind::GreaterEquals => {
                let (l, r) = numbers(operator, &left, &right)?;
                Value::Boolean(l >= r)
            }
            TokenKind::Equals => Value::Boolean(left == right),
            TokenKind::NotEquals => Value::Boolean(left != right),
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: operator.value.clone(),
                        message: String::from("not a binary operator"),
                    },
                    operator.span.start.clone(),
                ))
            }
        };

        Ok(value)
    }

    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> EvalResult {
        expr.expression().accept(self)
    }

    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> EvalResult {
        Ok(expr.value().clone())
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> EvalResult {
        let right = expr.right().accept(self)?;
        let operator = expr.operator();

        match (operator.kind, right) {
            (TokenKind::Dash, Value::Number(number)) => Ok(Value::Number(-number)),
            (TokenKind::Dash, _) => Err(operand_error(operator, "a number")),
            (TokenKind::Not, value) => Ok(Value::Boolean(!value.is_truthy())),
            _ => Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: operator.value.clone(),
                    message: String::from("not a unary operator"),
                },
                operator.span.start.clone(),
            )),
        }
    }

    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> EvalResult {
        Self::not_constant(format!("variable `{}`", expr.name().value), expr.name())
    }

    fn visit_assign_expr(&mut self, expr: &AssignExpr) -> EvalResult {
        Self::not_constant(format!("assignment to `{}`", expr.name().value), expr.name())
    }

    fn visit_logical_expr(&mut self, expr: &LogicalExpr) -> EvalResult {
        let left = expr.left().accept(self)?;

        let operator = expr.operator();
        let short_circuits = match operator.kind {
            TokenKind::Or => left.is_truthy(),
            TokenKind::And => !left.is_truthy(),
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: operator.value.clone(),
                        message: String::from("not a logical operator"),
                    },
                    operator.span.start.clone(),
                ))
            }
        };

        if short_circuits {
            Ok(left)
        } else {
            expr.right().accept(self)
        }
    }

    fn visit_call_expr(&mut self, expr: &CallExpr) -> EvalResult {
        Self::not_constant(String::from("call"), expr.paren())
    }

    fn visit_get_expr(&mut self, expr: &GetExpr) -> EvalResult {
        Self::not_constant(format!("property `{}`", expr.name().value), expr.name())
    }

    fn visit_set_expr(&mut self, expr: &SetExpr) -> EvalResult {
        Self::not_constant(
            format!("assignment to property `{}`", expr.name().value),
            expr.name(),
        )
    }

    fn visit_this_expr(&mut self, expr: &ThisExpr) -> EvalResult {
        Self::not_constant(String::from("`this`"), expr.keyword())
    }

    fn visit_super_expr(&mut self, expr: &SuperExpr) -> EvalResult {
        Self::not_constant(String::from("`super`"), expr.keyword())
    }
}
