//! Unit tests for AST construction and printing.

use super::ast::{Expr, ExprType};
use crate::{
    lexer::tokens::{Token, TokenKind, TokenValue},
    Position,
};

fn token(kind: TokenKind) -> Token {
    Token::new(kind, Position::default())
}

fn int(value: i32) -> Expr {
    Expr::Literal {
        value: Token {
            kind: TokenKind::IntegerLiteral,
            value: TokenValue::Integer(value),
            position: Position::default(),
        },
    }
}

fn name(text: &str) -> Token {
    Token {
        kind: TokenKind::Identifier,
        value: TokenValue::Identifier(String::from(text)),
        position: Position::default(),
    }
}

#[test]
fn test_print_binary() {
    let expr = Expr::binary(
        int(1),
        token(TokenKind::Plus),
        Expr::binary(int(2), token(TokenKind::Multiply), int(3)),
    );

    assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
}

#[test]
fn test_print_unary_and_grouping() {
    let expr = Expr::unary(
        token(TokenKind::Minus),
        Expr::grouping(Expr::Variable { name: name("x") }),
    );

    assert_eq!(expr.to_string(), "(- (group x))");
}

#[test]
fn test_print_declarations() {
    let declared = Expr::VariableDecl {
        name: name("x"),
        initializer: Some(Box::new(int(42))),
        mutable: false,
    };
    let uninitialised = Expr::VariableDecl {
        name: name("y"),
        initializer: None,
        mutable: true,
    };
    let function = Expr::FunctionDecl {
        name: name("add"),
        params: vec![name("a"), name("b")],
        body: vec![Expr::binary(
            Expr::Variable { name: name("a") },
            token(TokenKind::Plus),
            Expr::Variable { name: name("b") },
        )],
    };
    let empty = Expr::FunctionDecl {
        name: name("nop"),
        params: vec![],
        body: vec![],
    };

    assert_eq!(declared.to_string(), "(let x 42)");
    assert_eq!(uninitialised.to_string(), "(var y)");
    assert_eq!(function.to_string(), "(fun add (a b) (+ a b))");
    assert_eq!(empty.to_string(), "(fun nop ())");
}

#[test]
fn test_print_control_flow_and_calls() {
    let call = Expr::Call {
        callee: Box::new(Expr::Variable { name: name("println") }),
        arguments: vec![Expr::Literal {
            value: Token {
                kind: TokenKind::StringLiteral,
                value: TokenValue::String(String::from("hi")),
                position: Position::default(),
            },
        }],
    };
    let branch = Expr::If {
        condition: Box::new(Expr::binary(
            Expr::Variable { name: name("x") },
            token(TokenKind::GreaterThan),
            int(1),
        )),
        then_branch: Box::new(Expr::Block {
            statements: vec![call],
        }),
        else_branch: Some(Box::new(Expr::Block { statements: vec![] })),
    };

    assert_eq!(
        branch.to_string(),
        "(if (> x 1) (block (call println \"hi\")) (block))"
    );
}

#[test]
fn test_print_assign() {
    let assign = Expr::Assign {
        name: name("x"),
        value: Box::new(int(5)),
    };

    assert_eq!(assign.to_string(), "(assign x 5)");
    assert_eq!(assign.get_expr_type(), ExprType::Assign);
}

#[test]
fn test_node_count() {
    let expr = Expr::If {
        condition: Box::new(Expr::Variable { name: name("x") }),
        then_branch: Box::new(Expr::Block {
            statements: vec![int(1), int(2)],
        }),
        else_branch: None,
    };

    assert_eq!(expr.node_count(), 5);
    assert_eq!(expr.get_expr_type(), ExprType::If);
}
