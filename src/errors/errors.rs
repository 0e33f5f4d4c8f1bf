use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, parser::symbols::NonTerminal, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    /// The parser broke its own derivation bookkeeping; never caused by the input alone.
    Internal,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::NoViableAlternative { .. }
            | ErrorImpl::ExtraInput { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
            ErrorImpl::DerivationMismatch { .. } => ErrorKind::Internal,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoViableAlternative { .. } => "NoViableAlternative",
            ErrorImpl::ExtraInput { .. } => "ExtraInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::DerivationMismatch { .. } => "DerivationMismatch",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, .. } if *expected == TokenKind::Semicolon => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NoViableAlternative { rule, .. } => match rule {
                NonTerminal::Stmt => ErrorTip::Suggestion(String::from(
                    "a statement is an assignment `id = expr;` or `print(id);`",
                )),
                NonTerminal::Factor => ErrorTip::Suggestion(String::from(
                    "an operand is an identifier, an integer or a parenthesised expression",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::ExtraInput { found, .. } if *found == TokenKind::Int => {
                ErrorTip::Suggestion(String::from(
                    "declarations must come before every statement",
                ))
            }
            ErrorImpl::ExtraInput { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression across several assignments",
            )),
            ErrorImpl::DerivationMismatch { .. } => ErrorTip::Suggestion(String::from(
                "this is a bug in the parser, not in the input",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            ErrorKind::Lexical => write!(
                f,
                "Lexical error at line {}, column {}: {}",
                self.position.line, self.position.column, self.internal_error
            ),
            ErrorKind::Syntax => write!(
                f,
                "Syntax error at line {}: {}",
                self.position.line, self.internal_error
            ),
            ErrorKind::Internal => write!(
                f,
                "Internal error at line {}: {}",
                self.position.line, self.internal_error
            ),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// A set of token kinds any one of which would have been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected(pub Vec<TokenKind>);

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "nothing"),
            [only] => write!(f, "{}", only),
            [first, second] => write!(f, "{} or {}", first, second),
            [init @ .., last] => {
                for kind in init {
                    write!(f, "{}, ", kind)?;
                }
                write!(f, "or {}", last)
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("near token {found} (value {value:?}) - expected {expected}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        value: String,
    },
    #[error("no production for {rule} starts with {found} (value {value:?}) - expected {expected}")]
    NoViableAlternative {
        rule: NonTerminal,
        expected: Expected,
        found: TokenKind,
        value: String,
    },
    #[error("extra input after valid program, token {found} (value {value:?}) - expected EOF")]
    ExtraInput { found: TokenKind, value: String },
    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("cannot expand {rule}, the leftmost nonterminal of the sentential form is {leftmost}")]
    DerivationMismatch { rule: NonTerminal, leftmost: String },
}
