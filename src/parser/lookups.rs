use crate::lexer::tokens::TokenKind;

use super::symbols::{nt, t, NonTerminal, Symbol};

/// One alternative of a grammar rule. An empty `rhs` is the ε-production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    pub lhs: NonTerminal,
    pub rhs: &'static [Symbol],
}

use NonTerminal::*;

// Program   -> DeclList StmtList
pub const PROGRAM: Production = Production { lhs: Program, rhs: &[nt(DeclList), nt(StmtList)] };

// DeclList  -> Decl DeclList | ε
pub const DECL_LIST: Production = Production { lhs: DeclList, rhs: &[nt(Decl), nt(DeclList)] };
pub const DECL_LIST_EMPTY: Production = Production { lhs: DeclList, rhs: &[] };

// Decl      -> int id ;
pub const DECL: Production = Production {
    lhs: Decl,
    rhs: &[t(TokenKind::Int), t(TokenKind::Identifier), t(TokenKind::Semicolon)],
};

// StmtList  -> Stmt StmtList | ε
pub const STMT_LIST: Production = Production { lhs: StmtList, rhs: &[nt(Stmt), nt(StmtList)] };
pub const STMT_LIST_EMPTY: Production = Production { lhs: StmtList, rhs: &[] };

// Stmt      -> id = Expr ; | print ( id ) ;
pub const STMT_ASSIGN: Production = Production {
    lhs: Stmt,
    rhs: &[
        t(TokenKind::Identifier),
        t(TokenKind::Assignment),
        nt(Expr),
        t(TokenKind::Semicolon),
    ],
};
pub const STMT_PRINT: Production = Production {
    lhs: Stmt,
    rhs: &[
        t(TokenKind::Print),
        t(TokenKind::OpenParen),
        t(TokenKind::Identifier),
        t(TokenKind::CloseParen),
        t(TokenKind::Semicolon),
    ],
};

// Expr      -> Term ExprPrime
pub const EXPR: Production = Production { lhs: Expr, rhs: &[nt(Term), nt(ExprPrime)] };

// ExprPrime -> + Term ExprPrime | - Term ExprPrime | ε
pub const EXPR_PRIME_ADD: Production = Production {
    lhs: ExprPrime,
    rhs: &[t(TokenKind::Plus), nt(Term), nt(ExprPrime)],
};
pub const EXPR_PRIME_SUB: Production = Production {
    lhs: ExprPrime,
    rhs: &[t(TokenKind::Dash), nt(Term), nt(ExprPrime)],
};
pub const EXPR_PRIME_EMPTY: Production = Production { lhs: ExprPrime, rhs: &[] };

// Term      -> Factor TermPrime
pub const TERM: Production = Production { lhs: Term, rhs: &[nt(Factor), nt(TermPrime)] };

// TermPrime -> * Factor TermPrime | / Factor TermPrime | ε
pub const TERM_PRIME_MUL: Production = Production {
    lhs: TermPrime,
    rhs: &[t(TokenKind::Star), nt(Factor), nt(TermPrime)],
};
pub const TERM_PRIME_DIV: Production = Production {
    lhs: TermPrime,
    rhs: &[t(TokenKind::Slash), nt(Factor), nt(TermPrime)],
};
pub const TERM_PRIME_EMPTY: Production = Production { lhs: TermPrime, rhs: &[] };

// Factor    -> id | number | ( Expr )
pub const FACTOR_ID: Production = Production { lhs: Factor, rhs: &[t(TokenKind::Identifier)] };
pub const FACTOR_NUMBER: Production = Production { lhs: Factor, rhs: &[t(TokenKind::Number)] };
pub const FACTOR_GROUP: Production = Production {
    lhs: Factor,
    rhs: &[t(TokenKind::OpenParen), nt(Expr), t(TokenKind::CloseParen)],
};

/// Every production of the grammar, grouped by left-hand side.
#[cfg(test)]
pub const PRODUCTIONS: &[Production] = &[
    PROGRAM,
    DECL_LIST,
    DECL_LIST_EMPTY,
    DECL,
    STMT_LIST,
    STMT_LIST_EMPTY,
    STMT_ASSIGN,
    STMT_PRINT,
    EXPR,
    EXPR_PRIME_ADD,
    EXPR_PRIME_SUB,
    EXPR_PRIME_EMPTY,
    TERM,
    TERM_PRIME_MUL,
    TERM_PRIME_DIV,
    TERM_PRIME_EMPTY,
    FACTOR_ID,
    FACTOR_NUMBER,
    FACTOR_GROUP,
];

/// Token kinds that can begin a non-empty derivation of `nonterminal`.
///
/// Nullable rules (`Program`, `DeclList`, `StmtList`, `ExprPrime`, `TermPrime`) also derive ε,
/// which is not represented here.
pub fn first_set(nonterminal: NonTerminal) -> &'static [TokenKind] {
    match nonterminal {
        Program => &[TokenKind::Int, TokenKind::Identifier, TokenKind::Print],
        DeclList | Decl => &[TokenKind::Int],
        StmtList | Stmt => &[TokenKind::Identifier, TokenKind::Print],
        Expr | Term | Factor => &[
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::OpenParen,
        ],
        ExprPrime => &[TokenKind::Plus, TokenKind::Dash],
        TermPrime => &[TokenKind::Star, TokenKind::Slash],
    }
}

#[cfg(test)]
pub fn productions_for(nonterminal: NonTerminal) -> impl Iterator<Item = &'static Production> {
    PRODUCTIONS
        .iter()
        .filter(move |production| production.lhs == nonterminal)
}
