use crate::{
    ast::ast::Expr,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// declaration := variableDecl | functionDecl | statement
pub fn parse_declaration(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_declaration_at)
}

fn parse_declaration_at(parser: &mut Parser) -> Result<Expr, Error> {
    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_decl_lookup().get(&kind).copied());

    match handler {
        Some(handler) => handler(parser),
        None => parse_stmt(parser),
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_stmt_at)
}

fn parse_stmt_at(parser: &mut Parser) -> Result<Expr, Error> {
    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_stmt_lookup().get(&kind).copied());

    match handler {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.consume(TokenKind::NewLine, "Expect newline after expression.")?;

    // `x = value` on its own line assigns; inside expressions `=` compares.
    match expr {
        Expr::Binary {
            left,
            operator,
            right,
        } if operator.kind == TokenKind::Equal => match *left {
            Expr::Variable { name } => Ok(Expr::Assign { name, value: right }),
            left => Ok(Expr::Binary {
                left: Box::new(left),
                operator,
                right,
            }),
        },
        expr => Ok(expr),
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.advance_token("Expect 'let' or 'var'.")?;
    let name = parser.consume(TokenKind::Identifier, "Expect variable name.")?;

    let initializer = if parser.matches(&[TokenKind::Equal]) {
        Some(Box::new(parse_expr(parser, BindingPower::Default)?))
    } else {
        None
    };

    parser.consume(
        TokenKind::NewLine,
        "Expect newline after variable declaration.",
    )?;

    Ok(Expr::VariableDecl {
        name,
        initializer,
        mutable: keyword.kind == TokenKind::Var,
    })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.consume(TokenKind::Fun, "Expect 'fun'.")?;
    let name = parser.consume(TokenKind::Identifier, "Expect function name.")?;

    parser.consume(TokenKind::LParen, "Expect '(' after function name.")?;

    let mut params: Vec<Token> = Vec::new();
    if !parser.check(TokenKind::RParen) {
        loop {
            params.push(parser.consume(TokenKind::Identifier, "Expect parameter name.")?);
            if !parser.matches(&[TokenKind::Comma]) {
                break;
            }
        }
    }

    parser.consume(TokenKind::RParen, "Expect ')' after parameters.")?;
    parser.consume(TokenKind::LBrace, "Expect '{' before function body.")?;

    let body = parse_block_body(parser)?;

    Ok(Expr::FunctionDecl { name, params, body })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.consume(TokenKind::If, "Expect 'if'.")?;
    parser.consume(TokenKind::LParen, "Expect '(' after 'if'.")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.consume(TokenKind::RParen, "Expect ')' after if condition.")?;

    let then_branch = parse_stmt(parser)?;

    let else_branch = if parser.matches(&[TokenKind::Else]) {
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Expr::If {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch,
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.consume(TokenKind::LBrace, "Expect '{'.")?;
    let statements = parse_block_body(parser)?;

    Ok(Expr::Block { statements })
}

/// Parses declarations up to and including the closing `}`.
fn parse_block_body(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut statements = Vec::new();

    loop {
        parser.skip_newlines();
        if parser.check(TokenKind::RBrace) || parser.is_at_end() {
            break;
        }
        statements.push(parse_declaration(parser)?);
    }

    parser.consume(TokenKind::RBrace, "Expect '}' after block.")?;

    Ok(statements)
}
