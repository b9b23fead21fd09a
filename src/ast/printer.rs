use super::{
    ast::Expr,
    expressions::{
        AssignExpr, BinaryExpr, CallExpr, GetExpr, GroupingExpr, LiteralExpr, LogicalExpr,
        SetExpr, SuperExpr, ThisExpr, UnaryExpr, VariableExpr,
    },
    visitor::ExprVisitor,
};

/// Renders an expression in lisp-style prefix notation, e.g. `(+ 1 (group (* 2 3)))`.
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut builder = String::new();
        builder.push('(');
        builder.push_str(name);
        for expr in exprs {
            builder.push(' ');
            builder.push_str(&expr.accept(self));
        }
        builder.push(')');
        builder
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> String {
        self.parenthesize(&expr.operator().value, &[expr.left(), expr.right()])
    }

    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> String {
        self.parenthesize("group", &[expr.expression()])
    }

    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> String {
        expr.value().to_string()
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> String {
        self.parenthesize(&expr.operator().value, &[expr.right()])
    }

    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> String {
        expr.name().value.clone()
    }

    fn visit_assign_expr(&mut self, expr: &AssignExpr) -> String {
        format!("(= {} {})", expr.name().value, expr.value().accept(self))
    }

    fn visit_logical_expr(&mut self, expr: &LogicalExpr) -> String {
        self.parenthesize(&expr.operator().value, &[expr.left(), expr.right()])
    }

    fn visit_call_expr(&mut self, expr: &CallExpr) -> String {
        let mut exprs = vec![expr.callee()];
        exprs.extend(expr.args());
        self.parenthesize("call", &exprs)
    }

    fn visit_get_expr(&mut self, expr: &GetExpr) -> String {
        format!("(get {} {})", expr.object().accept(self), expr.name().value)
    }

    fn visit_set_expr(&mut self, expr: &SetExpr) -> String {
        format!(
            "(set {} {} {})",
            expr.object().accept(self),
            expr.name().value,
            expr.value().accept(self)
        )
    }

    fn visit_this_expr(&mut self, _expr: &ThisExpr) -> String {
        String::from("this")
    }

    fn visit_super_expr(&mut self, expr: &SuperExpr) -> String {
        format!("(super {})", expr.method().value)
    }
}
