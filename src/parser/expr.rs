use tracing::trace;

use crate::{
    ast::{ast::Expr, expressions::LiteralExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    value::Value,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud(token_kind) else {
        return Err(Error::new(
            ErrorImpl::ExpectedExpression {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller, keep extending lhs
    while parser.get_bp(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let Some(led) = parser.get_led(token_kind) else {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        };

        let token_bp = parser.get_bp(token_kind);
        trace!(operator = %token_kind, "led");
        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    let value = match token.kind {
        TokenKind::Number => match token.value.parse() {
            Ok(number) => Value::Number(number),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                ))
            }
        },
        TokenKind::String => Value::String(token.value.clone()),
        TokenKind::True => Value::Boolean(true),
        TokenKind::False => Value::Boolean(false),
        TokenKind::Nil => Value::Nil,
        TokenKind::Identifier => return Ok(Expr::variable(token)),
        _ => {
            return Err(Error::new(
                ErrorImpl::ExpectedExpression { token: token.value },
                token.span.start,
            ))
        }
    };

    Ok(Expr::Literal(LiteralExpr::new(value, token.span)))
}

pub fn parse_this_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.expect(TokenKind::This)?;
    Ok(Expr::this(keyword))
}

pub fn parse_super_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.expect(TokenKind::Super)?;
    parser.expect_detailed(TokenKind::Dot, "expected `.` after `super`")?;
    let method = parser.expect_detailed(TokenKind::Identifier, "expected superclass method name")?;

    Ok(Expr::super_(keyword, method))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::unary(operator_token, rhs))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_detailed(TokenKind::CloseParen, "expected `)` after expression")?;

    Ok(Expr::grouping(expr))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(left, operator_token, right))
}

pub fn parse_logical_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::logical(left, operator_token, right))
}

/// Assignment is right associative: `a = b = c` is `a = (b = c)`.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let equals = parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    match left {
        Expr::Variable(variable) => Ok(Expr::assign(variable.name().clone(), value)),
        Expr::Get(get) => {
            let (object, name) = get.into_parts();
            Ok(Expr::set(object, name, value))
        }
        _ => Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            equals.span.start,
        )),
    }
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    let paren = parser.expect_detailed(TokenKind::CloseParen, "expected `)` after arguments")?;

    Ok(Expr::call(left, paren, args))
}

pub fn parse_get_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let name = parser.expect_detailed(TokenKind::Identifier, "expected property name after `.`")?;

    Ok(Expr::get(left, name))
}
