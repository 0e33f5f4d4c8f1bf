use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    expr::parse_expr,
    lookups::{
        first_set, DECL, DECL_LIST, DECL_LIST_EMPTY, PROGRAM, STMT_ASSIGN, STMT_LIST, STMT_LIST_EMPTY,
        STMT_PRINT,
    },
    parser::Parser,
    symbols::NonTerminal,
};

pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    parser.expand(&PROGRAM)?;
    parse_decl_list(parser)?;
    parse_stmt_list(parser)
}

pub fn parse_decl_list(parser: &mut Parser) -> Result<(), Error> {
    // Iterative: each pass expands the DeclList left behind by the previous one.
    while parser.current_token_kind() == TokenKind::Int {
        parser.expand(&DECL_LIST)?;
        parse_decl(parser)?;
    }

    parser.expand(&DECL_LIST_EMPTY)
}

pub fn parse_decl(parser: &mut Parser) -> Result<(), Error> {
    parser.expand(&DECL)?;
    parser.expect(TokenKind::Int)?;
    parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

pub fn parse_stmt_list(parser: &mut Parser) -> Result<(), Error> {
    while parser
        .current_token()
        .is_one_of_many(first_set(NonTerminal::StmtList))
    {
        parser.expand(&STMT_LIST)?;
        parse_stmt(parser)?;
    }

    parser.expand(&STMT_LIST_EMPTY)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            parser.expand(&STMT_ASSIGN)?;
            parser.expect(TokenKind::Identifier)?;
            parser.expect(TokenKind::Assignment)?;
            parse_expr(parser)?;
            parser.expect(TokenKind::Semicolon)?;
        }
        TokenKind::Print => {
            parser.expand(&STMT_PRINT)?;
            parser.expect(TokenKind::Print)?;
            parser.expect(TokenKind::OpenParen)?;
            parser.expect(TokenKind::Identifier)?;
            parser.expect(TokenKind::CloseParen)?;
            parser.expect(TokenKind::Semicolon)?;
        }
        _ => return Err(parser.no_viable_alternative(NonTerminal::Stmt)),
    }

    Ok(())
}
