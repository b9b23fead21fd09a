//! A static pass collecting the bindings an expression touches.
//!
//! This is the shape a resolver takes: it walks every node, produces no
//! value, and records what it saw against the tokens that carry positions.

use crate::lexer::tokens::Token;

use super::{
    ast::Expr,
    expressions::{
        AssignExpr, BinaryExpr, CallExpr, GetExpr, GroupingExpr, LiteralExpr, LogicalExpr,
        SetExpr, SuperExpr, ThisExpr, UnaryExpr, VariableExpr,
    },
    visitor::ExprVisitor,
};

#[derive(Debug, Default)]
pub struct NameCollector {
    /// Variables read, in source order.
    pub reads: Vec<Token>,
    /// Variables assigned, in source order.
    pub writes: Vec<Token>,
    /// `this` and `super` keywords, which need an enclosing class.
    pub class_refs: Vec<Token>,
}

impl NameCollector {
    pub fn collect(expr: &Expr) -> Self {
        let mut collector = NameCollector::default();
        expr.accept(&mut collector);
        collector
    }

    pub fn read_names(&self) -> Vec<&str> {
        self.reads.iter().map(|t| t.value.as_str()).collect()
    }

    pub fn written_names(&self) -> Vec<&str> {
        self.writes.iter().map(|t| t.value.as_str()).collect()
    }
}

impl ExprVisitor<()> for NameCollector {
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) {
        expr.left().accept(self);
        expr.right().accept(self);
    }

    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) {
        expr.expression().accept(self);
    }

    fn visit_literal_expr(&mut self, _expr: &LiteralExpr) {}

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) {
        expr.right().accept(self);
    }

    fn visit_variable_expr(&mut self, expr: &VariableExpr) {
        self.reads.push(expr.name().clone());
    }

    fn visit_assign_expr(&mut self, expr: &AssignExpr) {
        // The value is evaluated before the binding is written.
        expr.value().accept(self);
        self.writes.push(expr.name().clone());
    }

    fn visit_logical_expr(&mut self, expr: &LogicalExpr) {
        expr.left().accept(self);
        expr.right().accept(self);
    }

    fn visit_call_expr(&mut self, expr: &CallExpr) {
        expr.callee().accept(self);
        for arg in expr.args() {
            arg.accept(self);
        }
    }

    fn visit_get_expr(&mut self, expr: &GetExpr) {
        expr.object().accept(self);
    }

    fn visit_set_expr(&mut self, expr: &SetExpr) {
        expr.object().accept(self);
        expr.value().accept(self);
    }

    fn visit_this_expr(&mut self, expr: &ThisExpr) {
        self.class_refs.push(expr.keyword().clone());
    }

    fn visit_super_expr(&mut self, expr: &SuperExpr) {
        self.class_refs.push(expr.keyword().clone());
    }
}
