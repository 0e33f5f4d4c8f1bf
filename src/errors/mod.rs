//! Error types for the front end.
//!
//! A single `Error` carries a source position and one `ErrorImpl` variant:
//!
//! - Lexical errors for characters no token pattern accepts
//! - Syntax errors for terminal mismatches, missing alternatives and trailing input
//! - Internal errors when derivation bookkeeping goes out of step with the rules

pub mod errors;

#[cfg(test)]
mod tests;
