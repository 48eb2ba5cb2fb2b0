use crate::{
    ast::ast::Expr,
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

const EXPECT_EXPRESSION: &str = "Expect expression.";

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nested(|parser| parse_expr_at(parser, bp))
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = parser
        .current_token_kind()
        .and_then(|kind| parser.get_nud_lookup().get(&kind).copied());
    let Some(nud) = nud else {
        return Err(parser.error(EXPECT_EXPRESSION));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, keep folding into lhs
    while let Some(kind) = parser.current_token_kind() {
        let next_bp = parser
            .get_bp_lookup()
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&kind).copied() else {
            break;
        };
        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance_token(EXPECT_EXPRESSION)?;

    match token.kind {
        TokenKind::Identifier => Ok(Expr::Variable { name: token }),
        TokenKind::IntegerLiteral | TokenKind::FloatingLiteral | TokenKind::StringLiteral => {
            Ok(Expr::Literal { value: token })
        }
        _ => Err(parser.error(EXPECT_EXPRESSION)),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance_token(EXPECT_EXPRESSION)?;
    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(left, operator, right))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance_token(EXPECT_EXPRESSION)?;
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::unary(operator, rhs))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.consume(TokenKind::LParen, EXPECT_EXPRESSION)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.consume(TokenKind::RParen, "Expect ')' after expression.")?;

    Ok(Expr::grouping(expr))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.consume(TokenKind::LParen, "Expect '(' before arguments.")?;

    let mut arguments = vec![];
    if !parser.check(TokenKind::RParen) {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);
            if !parser.matches(&[TokenKind::Comma]) {
                break;
            }
        }
    }

    parser.consume(TokenKind::RParen, "Expect ')' after arguments.")?;

    Ok(Expr::Call {
        callee: Box::new(left),
        arguments,
    })
}
