//! Error types and error handling for the interpreter front end.
//!
//! This module defines the error type shared by the lexer, the parser and
//! the constant evaluator. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each phase
//! - Error names and suggestions used when rendering diagnostics
//!
//! The expression tree itself never produces errors.

pub mod errors;

#[cfg(test)]
mod tests;
