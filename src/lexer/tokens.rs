use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("print", TokenKind::Print);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =
    Semicolon,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Int,
    Print,
}

impl TokenKind {
    /// Category name used when listing the token stream.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "ID",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Slash => "DIV",
            TokenKind::Star => "MULT",
            TokenKind::Int => "INT",
            TokenKind::Print => "PRINT",
        }
    }

    /// How the kind is written when it appears as a terminal in a sentential form.
    ///
    /// Identifiers and literals render as their category (`id`, `number`) rather than
    /// their lexeme, since the derivation is over token kinds.
    pub fn grammar_symbol(&self) -> &'static str {
        match self {
            TokenKind::EOF => "$",
            TokenKind::Number => "number",
            TokenKind::Identifier => "id",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Semicolon => ";",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Int => "int",
            TokenKind::Print => "print",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token({}, {:?}, {}:{})",
            self.kind,
            self.value,
            self.line(),
            self.column()
        )
    }
}

impl Token {
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    pub fn column(&self) -> usize {
        self.span.start.column
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

/// Renders the kinds of a token stream as a single space separated line.
pub fn kinds_line(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.kind.name())
        .collect::<Vec<_>>()
        .join(" ")
}
