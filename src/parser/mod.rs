//! Predictive (LL(1)) recursive-descent parser.
//!
//! The parser validates a token stream against a fixed grammar and records the
//! leftmost derivation it follows:
//!
//! - One function per nonterminal, choosing a production by the lookahead token
//! - Productions and FIRST sets as static tables
//! - A sentential form rewritten step by step into a derivation trace
//! - Fail-fast error reporting at the first mismatch

pub mod derivation;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod symbols;
