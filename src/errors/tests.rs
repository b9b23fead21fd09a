//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::sync::Arc;

fn at(offset: u32) -> Position {
    Position(offset, Arc::new("test.plumb".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.plumb");
}

#[test]
fn test_invalid_assignment_target_tip() {
    let error = Error::new(ErrorImpl::InvalidAssignmentTarget, at(0));

    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
    assert_eq!(
        error.get_tip().to_string(),
        "Only variables and properties can be assigned to"
    );
}

#[test]
fn test_operand_type_error() {
    let error = Error::new(
        ErrorImpl::OperandTypeError {
            operator: "-".to_string(),
            expected: "numbers".to_string(),
        },
        at(3),
    );

    assert_eq!(error.get_error_name(), "OperandTypeError");
    assert_eq!(error.get_tip().to_string(), "Operands of `-` must be numbers");
}

#[test]
fn test_not_constant_error() {
    let error = Error::new(
        ErrorImpl::NotConstant {
            what: "call".to_string(),
        },
        at(7),
    );

    assert_eq!(error.get_error_name(), "NotConstant");
    assert_eq!(error.to_string(), "call is not a constant expression at test.plumb:7");
}

#[test]
fn test_error_impl_messages() {
    assert_eq!(
        ErrorImpl::UnexpectedTokenDetailed {
            token: ")".to_string(),
            message: "expected property name after `.`".to_string(),
        }
        .to_string(),
        "unexpected token (\"expected property name after `.`\"): \")\""
    );
    assert_eq!(ErrorImpl::UnterminatedString.to_string(), "unterminated string");
}
