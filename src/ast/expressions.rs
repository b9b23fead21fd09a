use crate::{lexer::tokens::Token, value::Value, Span};

use super::{ast::Expr, visitor::ExprVisitor};

// LITERALS

/// Literal Expression
/// A constant drawn from the runtime value domain.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    value: Value,
    span: Span,
}

impl LiteralExpr {
    pub fn new(value: Value, span: Span) -> Self {
        LiteralExpr { value, span }
    }
    pub fn value(&self) -> &Value {
        &self.value
    }
    pub fn span(&self) -> &Span {
        &self.span
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_literal_expr(self)
    }
}

/// Variable Expression
/// A read of a named binding. The name is resolved by whoever walks the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    name: Token,
}

impl VariableExpr {
    pub fn new(name: Token) -> Self {
        VariableExpr { name }
    }
    pub fn name(&self) -> &Token {
        &self.name
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_variable_expr(self)
    }
}

/// This Expression
/// A reference to the instance a method was invoked on.
#[derive(Debug, Clone, PartialEq)]
pub struct ThisExpr {
    keyword: Token,
}

impl ThisExpr {
    pub fn new(keyword: Token) -> Self {
        ThisExpr { keyword }
    }
    pub fn keyword(&self) -> &Token {
        &self.keyword
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_this_expr(self)
    }
}

/// Super Expression
/// A superclass method lookup, `super.method`.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperExpr {
    keyword: Token,
    method: Token,
}

impl SuperExpr {
    pub fn new(keyword: Token, method: Token) -> Self {
        SuperExpr { keyword, method }
    }
    pub fn keyword(&self) -> &Token {
        &self.keyword
    }
    pub fn method(&self) -> &Token {
        &self.method
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_super_expr(self)
    }
}

// COMPLEX

/// Binary Expression
/// An infix operator applied to two operands (`a + b`, `a < b`).
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    left: Box<Expr>,
    operator: Token,
    right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
    pub fn left(&self) -> &Expr {
        &self.left
    }
    pub fn operator(&self) -> &Token {
        &self.operator
    }
    pub fn right(&self) -> &Expr {
        &self.right
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_binary_expr(self)
    }
}

/// Grouping Expression
/// A parenthesized expression. Kept in the tree so the explicit grouping
/// survives into printed output.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    expression: Box<Expr>,
}

impl GroupingExpr {
    pub fn new(expression: Expr) -> Self {
        GroupingExpr {
            expression: Box::new(expression),
        }
    }
    pub fn expression(&self) -> &Expr {
        &self.expression
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_grouping_expr(self)
    }
}

/// Unary Expression
/// A prefix operator (`-x`, `!x`).
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    operator: Token,
    right: Box<Expr>,
}

impl UnaryExpr {
    pub fn new(operator: Token, right: Expr) -> Self {
        UnaryExpr {
            operator,
            right: Box::new(right),
        }
    }
    pub fn operator(&self) -> &Token {
        &self.operator
    }
    pub fn right(&self) -> &Expr {
        &self.right
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_unary_expr(self)
    }
}

/// Assign Expression
/// A write to a named binding. The assigned value is also the result.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    name: Token,
    value: Box<Expr>,
}

impl AssignExpr {
    pub fn new(name: Token, value: Expr) -> Self {
        AssignExpr {
            name,
            value: Box::new(value),
        }
    }
    pub fn name(&self) -> &Token {
        &self.name
    }
    pub fn value(&self) -> &Expr {
        &self.value
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_assign_expr(self)
    }
}

/// Logical Expression
/// Short-circuiting `and` / `or`. Whether `right` runs is up to the visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    left: Box<Expr>,
    operator: Token,
    right: Box<Expr>,
}

impl LogicalExpr {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        LogicalExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
    pub fn left(&self) -> &Expr {
        &self.left
    }
    pub fn operator(&self) -> &Token {
        &self.operator
    }
    pub fn right(&self) -> &Expr {
        &self.right
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_logical_expr(self)
    }
}

/// Call Expression
/// Invocation of a callee with arguments in evaluation order.
///
/// `paren` is the closing parenthesis; it is only kept so runtime errors
/// raised by the call can point at the call site.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    callee: Box<Expr>,
    paren: Token,
    args: Vec<Expr>,
}

impl CallExpr {
    pub fn new(callee: Expr, paren: Token, args: Vec<Expr>) -> Self {
        CallExpr {
            callee: Box::new(callee),
            paren,
            args,
        }
    }
    pub fn callee(&self) -> &Expr {
        &self.callee
    }
    pub fn paren(&self) -> &Token {
        &self.paren
    }
    pub fn args(&self) -> &[Expr] {
        &self.args
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_call_expr(self)
    }
}

/// Get Expression
/// A property read, `object.name`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetExpr {
    object: Box<Expr>,
    name: Token,
}

impl GetExpr {
    pub fn new(object: Expr, name: Token) -> Self {
        GetExpr {
            object: Box::new(object),
            name,
        }
    }
    pub fn object(&self) -> &Expr {
        &self.object
    }
    pub fn name(&self) -> &Token {
        &self.name
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_get_expr(self)
    }
    /// Consumes the node, for the parser to turn a property read into a write.
    pub(crate) fn into_parts(self) -> (Expr, Token) {
        (*self.object, self.name)
    }
}

/// Set Expression
/// A property write, `object.name = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct SetExpr {
    object: Box<Expr>,
    name: Token,
    value: Box<Expr>,
}

impl SetExpr {
    pub fn new(object: Expr, name: Token, value: Expr) -> Self {
        SetExpr {
            object: Box::new(object),
            name,
            value: Box::new(value),
        }
    }
    pub fn object(&self) -> &Expr {
        &self.object
    }
    pub fn name(&self) -> &Token {
        &self.name
    }
    pub fn value(&self) -> &Expr {
        &self.value
    }
    pub fn accept<R, V: ExprVisitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        visitor.visit_set_expr(self)
    }
}
