//! Parser state and entry point.
//!
//! The parser walks a fully tokenized input with one token of lookahead. Each grammar
//! rule is a function in `stmt` or `expr`; before consuming anything a rule records the
//! production it chose, so the derivation trace is built in leftmost order as parsing
//! proceeds.

use crate::{
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    derivation::Derivation,
    lookups::{first_set, Production},
    stmt::parse_program,
    symbols::NonTerminal,
};

/// Deepest parenthesis nesting accepted inside one expression.
///
/// Each level costs three nested rule calls, so the limit keeps recursion well inside
/// a 2 MiB thread stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The parser state: the token stream, the lookahead index and the derivation so far.
pub struct Parser {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Index of the lookahead token
    pos: usize,
    /// Sentential form and trace of every production applied
    derivation: Derivation,
    /// Parenthesised expressions currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An EOF token is appended if the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(Position::start);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: end, end }));
        }

        Parser {
            tokens,
            pos: 0,
            derivation: Derivation::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one. Never moves past EOF.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.current_token_kind() != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedToken` at the current token otherwise; nothing is consumed.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.kind,
                    value: token.value.clone(),
                },
                token.span.start,
            ));
        }

        tracing::debug!("matched {} at {}", token.kind, token.span.start);
        Ok(self.advance().clone())
    }

    /// Records `production` in the derivation.
    pub fn expand(&mut self, production: &Production) -> Result<(), Error> {
        let position = self.get_position();
        self.derivation
            .expand(production.lhs, production.rhs, position)
    }

    /// The error for a rule whose lookahead matches none of its alternatives.
    pub fn no_viable_alternative(&self, rule: NonTerminal) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::NoViableAlternative {
                rule,
                expected: Expected(first_set(rule).to_vec()),
                found: token.kind,
                value: token.value.clone(),
            },
            token.span.start,
        )
    }

    /// Enters a parenthesised expression.
    ///
    /// # Errors
    ///
    /// Returns `NestingTooDeep` at the current token once `MAX_NESTING_DEPTH` groups are open.
    pub fn enter_group(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    /// Returns the derivation recorded so far; partial if parsing failed.
    pub fn derivation(&self) -> &Derivation {
        &self.derivation
    }

    pub fn into_derivation(self) -> Derivation {
        self.derivation
    }

    /// Rejects a stream with an EOF token before its end; what follows it is extra input.
    fn check_single_eof(&self) -> Result<(), Error> {
        let first_eof = self
            .tokens
            .iter()
            .position(|token| token.kind == TokenKind::EOF)
            .unwrap_or(self.tokens.len() - 1);

        match self.tokens.get(first_eof + 1) {
            Some(token) => Err(Error::new(
                ErrorImpl::ExtraInput {
                    found: token.kind,
                    value: token.value.clone(),
                },
                token.span.start,
            )),
            None => Ok(()),
        }
    }

    /// Derives `Program` and then requires the input to be exhausted.
    ///
    /// Stops at the first error; the derivation keeps every step recorded before it.
    pub fn run(&mut self) -> Result<(), Error> {
        self.check_single_eof()?;
        parse_program(self)?;

        let token = self.current_token();
        if token.kind != TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::ExtraInput {
                    found: token.kind,
                    value: token.value.clone(),
                },
                token.span.start,
            ));
        }

        tracing::debug!(
            "parsed program with {} productions",
            self.derivation.applied()
        );
        Ok(())
    }
}

/// Parses a token stream and returns its leftmost derivation.
///
/// This is the main entry point for parsing. Use `Parser` directly to keep access to the
/// partial derivation when parsing fails.
///
/// # Arguments
///
/// * `tokens` - Tokens produced by `tokenize`
///
/// # Returns
///
/// The derivation, whose last step is the input as a sentence of terminals, or the first
/// syntax error.
pub fn parse(tokens: Vec<Token>) -> Result<Derivation, Error> {
    let mut parser = Parser::new(tokens);
    parser.run()?;
    Ok(parser.into_derivation())
}
