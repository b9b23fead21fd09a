use super::expressions::{
    AssignExpr, BinaryExpr, CallExpr, GetExpr, GroupingExpr, LiteralExpr, LogicalExpr, SetExpr,
    SuperExpr, ThisExpr, UnaryExpr, VariableExpr,
};

/// Expression Visitor
///
/// One handler per expression shape, all required. A traversal implements this
/// once with its own result type `R` and starts with [`Expr::accept`].
/// Handlers recurse into children themselves, by calling `accept` on them.
///
/// [`Expr::accept`]: super::ast::Expr::accept
pub trait ExprVisitor<R> {
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> R;
    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> R;
    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> R;
    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> R;
    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> R;
    fn visit_assign_expr(&mut self, expr: &AssignExpr) -> R;
    fn visit_logical_expr(&mut self, expr: &LogicalExpr) -> R;
    fn visit_call_expr(&mut self, expr: &CallExpr) -> R;
    fn visit_get_expr(&mut self, expr: &GetExpr) -> R;
    fn visit_set_expr(&mut self, expr: &SetExpr) -> R;
    fn visit_this_expr(&mut self, expr: &ThisExpr) -> R;
    fn visit_super_expr(&mut self, expr: &SuperExpr) -> R;
}
