#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path};

use crate::errors::errors::{Error, ErrorTip};

pub mod cli;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of a 1-based line, or an empty string past the end of the source.
pub fn get_line(source: &str, line: usize) -> &str {
    source
        .split('\n')
        .nth(line.saturating_sub(1))
        .map(|text| text.trim_end_matches('\r'))
        .unwrap_or("")
}

/// Renders an error with the offending source line and a caret under its column.
///
/// ```text
/// Syntax error at line 1: near token EOF (value "") - expected SEMICOLON
/// -> program.mini
///   |
/// 1 | int x
///   | -----^
///   = did you miss a semicolon?
/// ```
pub fn render_diagnostic(error: &Error, source: &str, file: &Path) -> String {
    let position = error.get_position();
    let line_text = get_line(source, position.line);

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    out.push_str(&format!("{}\n", error));
    out.push_str(&format!("-> {}\n", file.display()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        out.push_str(&format!("{:>padding$} {}\n", "=", tip));
    }

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let removed = string.chars().count() - trimmed.chars().count();

    (trimmed, removed)
}
