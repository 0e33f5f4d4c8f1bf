use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    lookups::{
        EXPR, EXPR_PRIME_ADD, EXPR_PRIME_EMPTY, EXPR_PRIME_SUB, FACTOR_GROUP, FACTOR_ID,
        FACTOR_NUMBER, TERM, TERM_PRIME_DIV, TERM_PRIME_EMPTY, TERM_PRIME_MUL,
    },
    parser::Parser,
    symbols::NonTerminal,
};

pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.expand(&EXPR)?;
    parse_term(parser)?;
    parse_expr_prime(parser)
}

pub fn parse_expr_prime(parser: &mut Parser) -> Result<(), Error> {
    loop {
        let operator = parser.current_token_kind();
        let production = match operator {
            TokenKind::Plus => &EXPR_PRIME_ADD,
            TokenKind::Dash => &EXPR_PRIME_SUB,
            _ => break,
        };

        parser.expand(production)?;
        parser.expect(operator)?;
        parse_term(parser)?;
    }

    parser.expand(&EXPR_PRIME_EMPTY)
}

pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parser.expand(&TERM)?;
    parse_factor(parser)?;
    parse_term_prime(parser)
}

pub fn parse_term_prime(parser: &mut Parser) -> Result<(), Error> {
    loop {
        let operator = parser.current_token_kind();
        let production = match operator {
            TokenKind::Star => &TERM_PRIME_MUL,
            TokenKind::Slash => &TERM_PRIME_DIV,
            _ => break,
        };

        parser.expand(production)?;
        parser.expect(operator)?;
        parse_factor(parser)?;
    }

    parser.expand(&TERM_PRIME_EMPTY)
}

pub fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            parser.expand(&FACTOR_ID)?;
            parser.expect(TokenKind::Identifier)?;
        }
        TokenKind::Number => {
            parser.expand(&FACTOR_NUMBER)?;
            parser.expect(TokenKind::Number)?;
        }
        TokenKind::OpenParen => {
            parser.expand(&FACTOR_GROUP)?;
            parser.enter_group()?;
            parser.expect(TokenKind::OpenParen)?;
            parse_expr(parser)?;
            parser.leave_group();
            parser.expect(TokenKind::CloseParen)?;
        }
        _ => return Err(parser.no_viable_alternative(NonTerminal::Factor)),
    }

    Ok(())
}
