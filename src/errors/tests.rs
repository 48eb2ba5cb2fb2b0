//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '@' },
        Position::new(0, 10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: String::from("identifier"),
            message: String::from("Expect expression."),
        },
        Position::new(3, 42),
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(0, 0));

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_kind().to_string(), "unterminated string literal");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: String::from("99999999999"),
        },
        Position::new(0, 0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.get_tip().to_string(),
        "Invalid number: `99999999999`, is it above the integer limit?"
    );
}

#[test]
fn test_unexpected_eof_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedEof {
            message: String::from("Expect newline after expression."),
        },
        Position::new(0, 4),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEof");
    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected end of input, Expect newline after expression."
    );
}

#[test]
fn test_error_classification() {
    let lexical = Error::new(ErrorImpl::UnterminatedString, Position::new(0, 0));
    let syntax = Error::new(
        ErrorImpl::UnexpectedToken {
            token: String::from("}"),
            message: String::from("Expect expression."),
        },
        Position::new(0, 0),
    );

    assert!(lexical.is_lexical());
    assert!(!lexical.is_syntax());
    assert!(syntax.is_syntax());
    assert!(!syntax.is_lexical());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '@' },
        Position::new(0, 0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: String::from("}"),
            message: String::from("Expect expression."),
        },
        Position::new(0, 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected token: `}`, Expect expression."),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion(String::from("Try this instead"));
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '#' },
        Position::new(1, 2),
    );

    assert_eq!(error.to_string(), "unexpected character: '#' at 2:3");
}
