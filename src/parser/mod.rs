//! Parser module for building expression trees.
//!
//! This module contains the parser that transforms a stream of tokens
//! into an [`Expr`](crate::ast::ast::Expr). It uses a Pratt parser with
//! proper operator precedence and handles:
//!
//! - Literals, variables, `this` and `super.method`
//! - Prefix, infix and short-circuiting logical operators
//! - Calls, property reads, and assignment to variables or properties
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! with binding powers for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
