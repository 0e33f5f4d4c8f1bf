//! Lexical analysis module.
//!
//! Converts source text into a fully materialised token stream for the parser:
//!
//! - Table of anchored regex patterns, tried in order
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Line/column tracking for every token
//! - Whitespace and `//` line comment skipping

pub mod lexer;
pub mod tokens;
