//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip, Expected};
use crate::lexer::tokens::TokenKind;
use crate::parser::symbols::NonTerminal;
use crate::Position;

fn at(line: usize, column: usize) -> Position {
    Position { line, column }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        at(1, 1),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::ExtraInput {
            found: TokenKind::Identifier,
            value: "y".to_string(),
        },
        at(3, 42),
    );

    assert_eq!(error.get_position(), &at(3, 42));
}

#[test]
fn test_lexical_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        at(1, 1),
    );

    assert_eq!(
        error.to_string(),
        "Lexical error at line 1, column 1: unexpected character '@'"
    );
}

#[test]
fn test_unexpected_token_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Number,
            value: "3".to_string(),
        },
        at(2, 3),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.to_string(),
        "Syntax error at line 2: near token NUMBER (value \"3\") - expected ASSIGN"
    );
}

#[test]
fn test_extra_input_display() {
    let error = Error::new(
        ErrorImpl::ExtraInput {
            found: TokenKind::CloseParen,
            value: ")".to_string(),
        },
        at(4, 9),
    );

    assert_eq!(error.get_error_name(), "ExtraInput");
    assert_eq!(
        error.to_string(),
        "Syntax error at line 4: extra input after valid program, token RPAREN (value \")\") - expected EOF"
    );
}

#[test]
fn test_derivation_mismatch_is_internal() {
    let error = Error::new(
        ErrorImpl::DerivationMismatch {
            rule: NonTerminal::Term,
            leftmost: "Expr".to_string(),
        },
        at(1, 5),
    );

    assert_eq!(error.kind(), ErrorKind::Internal);
    assert!(error.to_string().starts_with("Internal error at line 1: cannot expand Term"));
}

#[test]
fn test_expected_display() {
    assert_eq!(Expected(vec![]).to_string(), "nothing");
    assert_eq!(Expected(vec![TokenKind::Semicolon]).to_string(), "SEMICOLON");
    assert_eq!(
        Expected(vec![TokenKind::Identifier, TokenKind::Print]).to_string(),
        "ID or PRINT"
    );
    assert_eq!(
        Expected(vec![
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::OpenParen
        ])
        .to_string(),
        "ID, NUMBER, or LPAREN"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '$' },
        at(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_missing_semicolon() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::EOF,
            value: String::new(),
        },
        at(1, 6),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("semicolon")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_declaration_order() {
    let error = Error::new(
        ErrorImpl::ExtraInput {
            found: TokenKind::Int,
            value: "int".to_string(),
        },
        at(2, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
