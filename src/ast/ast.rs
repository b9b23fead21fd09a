use crate::{lexer::tokens::Token, value::Value, Span};

use super::{
    expressions::{
        AssignExpr, BinaryExpr, CallExpr, GetExpr, GroupingExpr, LiteralExpr, LogicalExpr,
        SetExpr, SuperExpr, ThisExpr, UnaryExpr, VariableExpr,
    },
    visitor::ExprVisitor,
};

/// Expression
///
/// The closed set of expression shapes. Nodes are immutable once built and
/// own their children exclusively, so a tree is `Send + Sync` and can be
/// walked from several threads at once.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Grouping(GroupingExpr),
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Variable(VariableExpr),
    Assign(AssignExpr),
    Logical(LogicalExpr),
    Call(CallExpr),
    Get(GetExpr),
    Set(SetExpr),
    This(ThisExpr),
    Super(SuperExpr),
}

impl Expr {
    /// Hands the node to the one handler of `visitor` matching its shape.
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Expr::Binary(expr) => expr.accept(visitor),
            Expr::Grouping(expr) => expr.accept(visitor),
            Expr::Literal(expr) => expr.accept(visitor),
            Expr::Unary(expr) => expr.accept(visitor),
            Expr::Variable(expr) => expr.accept(visitor),
            Expr::Assign(expr) => expr.accept(visitor),
            Expr::Logical(expr) => expr.accept(visitor),
            Expr::Call(expr) => expr.accept(visitor),
            Expr::Get(expr) => expr.accept(visitor),
            Expr::Set(expr) => expr.accept(visitor),
            Expr::This(expr) => expr.accept(visitor),
            Expr::Super(expr) => expr.accept(visitor),
        }
    }

    /// Returns the source span covered by the expression.
    pub fn span(&self) -> Span {
        match self {
            Expr::Binary(expr) => expr.left().span().to(&expr.right().span()),
            Expr::Grouping(expr) => expr.expression().span(),
            Expr::Literal(expr) => expr.span().clone(),
            Expr::Unary(expr) => expr.operator().span.to(&expr.right().span()),
            Expr::Variable(expr) => expr.name().span.clone(),
            Expr::Assign(expr) => expr.name().span.to(&expr.value().span()),
            Expr::Logical(expr) => expr.left().span().to(&expr.right().span()),
            Expr::Call(expr) => expr.callee().span().to(&expr.paren().span),
            Expr::Get(expr) => expr.object().span().to(&expr.name().span),
            Expr::Set(expr) => expr.object().span().to(&expr.value().span()),
            Expr::This(expr) => expr.keyword().span.clone(),
            Expr::Super(expr) => expr.keyword().span.to(&expr.method().span),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(BinaryExpr::new(left, operator, right))
    }

    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping(GroupingExpr::new(expression))
    }

    /// A literal with no source location.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(LiteralExpr::new(value.into(), Span::null()))
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary(UnaryExpr::new(operator, right))
    }

    pub fn variable(name: Token) -> Self {
        Expr::Variable(VariableExpr::new(name))
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign(AssignExpr::new(name, value))
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical(LogicalExpr::new(left, operator, right))
    }

    pub fn call(callee: Expr, paren: Token, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr::new(callee, paren, args))
    }

    pub fn get(object: Expr, name: Token) -> Self {
        Expr::Get(GetExpr::new(object, name))
    }

    pub fn set(object: Expr, name: Token, value: Expr) -> Self {
        Expr::Set(SetExpr::new(object, name, value))
    }

    pub fn this(keyword: Token) -> Self {
        Expr::This(ThisExpr::new(keyword))
    }

    pub fn super_(keyword: Token, method: Token) -> Self {
        Expr::Super(SuperExpr::new(keyword, method))
    }
}
