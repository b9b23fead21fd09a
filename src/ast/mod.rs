/// AST (Abstract Syntax Tree) module
/// Contains the expression tree and the traversals defined over it
///
/// Submodules:
/// - ast: The `Expr` sum type and its dispatch entry point
/// - expressions: One node struct per expression shape
/// - visitor: The `ExprVisitor` trait every traversal implements
/// - printer: Lisp-style rendering of a tree
/// - names: Collection of the bindings a tree reads and writes
pub mod ast;
pub mod expressions;
pub mod names;
pub mod printer;
pub mod visitor;
