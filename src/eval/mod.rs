//! Constant evaluation of expression trees.
//!
//! The evaluator is a visitor producing runtime [`Value`](crate::value::Value)s.
//! It covers the operators whose result depends only on the tree itself.

pub mod evaluator;

#[cfg(test)]
mod tests;
