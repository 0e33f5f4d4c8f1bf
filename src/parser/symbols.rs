//! Grammar symbols.
//!
//! Terminals and nonterminals share one type so a sentential form can hold both
//! and still be searched by variant.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Program,
    DeclList,
    Decl,
    StmtList,
    Stmt,
    Expr,
    ExprPrime,
    Term,
    TermPrime,
    Factor,
}

impl NonTerminal {
    pub fn name(&self) -> &'static str {
        match self {
            NonTerminal::Program => "Program",
            NonTerminal::DeclList => "DeclList",
            NonTerminal::Decl => "Decl",
            NonTerminal::StmtList => "StmtList",
            NonTerminal::Stmt => "Stmt",
            NonTerminal::Expr => "Expr",
            NonTerminal::ExprPrime => "ExprPrime",
            NonTerminal::Term => "Term",
            NonTerminal::TermPrime => "TermPrime",
            NonTerminal::Factor => "Factor",
        }
    }
}

impl Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(TokenKind),
    NonTerminal(NonTerminal),
}

impl Symbol {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn as_nonterminal(&self) -> Option<NonTerminal> {
        match self {
            Symbol::NonTerminal(nonterminal) => Some(*nonterminal),
            Symbol::Terminal(_) => None,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Terminal(kind) => write!(f, "{}", kind.grammar_symbol()),
            Symbol::NonTerminal(nonterminal) => write!(f, "{}", nonterminal),
        }
    }
}

pub const fn t(kind: TokenKind) -> Symbol {
    Symbol::Terminal(kind)
}

pub const fn nt(nonterminal: NonTerminal) -> Symbol {
    Symbol::NonTerminal(nonterminal)
}
