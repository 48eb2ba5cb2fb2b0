//! Integration tests for the lexer and parser working together.
//!
//! These tests run source text through `tokenize` and `parse` and check
//! the resulting tree, the token dump and the rendered diagnostics.

use sprig::{
    ast::ast::Expr,
    lexer::{
        lexer::tokenize,
        tokens::{dump_tokens, TokenKind},
    },
    parser::parser::parse,
    render_error,
};

const DEMO_PROGRAM: &str = r#"let x =     42
var y = 3.14
let z       = x         + y
let a = x * y
let b = x -         y
var c = z /     a

fun abc(a, b) = a + b

fun def() = {
    let foo = "     Hello"
    let trimmed = foo.trim()
    return trimmed
}

fun foo() {
    if (x > y) {
        println             (       "x is greater")
    } else {
        println(        "y is greater"  )
    }
}

when(c) {
    >= 50 -> {
        println("foo")
    }
    10 -> println("bar")
    else -> println("more")
}"#;

#[test]
fn test_demo_program_tokenizes() {
    let tokens = tokenize(DEMO_PROGRAM).unwrap();

    let newlines = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::NewLine)
        .count();
    assert_eq!(newlines, DEMO_PROGRAM.matches('\n').count());

    let dump = dump_tokens(&tokens);
    let first_line = dump.lines().next().unwrap();
    assert_eq!(first_line, "LET IDENTIFIER(x) EQUAL INTEGERLITERAL(42) ");
    assert!(dump.contains("STRINGLITERAL(\"     Hello\")"));
    assert!(dump.contains("GREATERTHAN EQUAL INTEGERLITERAL(50) ARROW LBRACE"));

    let arrow = tokens
        .iter()
        .find(|token| token.kind == TokenKind::Arrow)
        .unwrap();
    assert_eq!((arrow.line(), arrow.column()), (24, 10));
}

#[test]
fn test_demo_program_parses_with_recovery() {
    let result = parse(tokenize(DEMO_PROGRAM).unwrap());

    let rendered: Vec<String> = result.body.iter().map(|expr| expr.to_string()).collect();
    assert_eq!(
        &rendered[..6],
        &[
            "(let x 42)",
            "(var y 3.14)",
            "(let z (+ x y))",
            "(let a (* x y))",
            "(let b (- x y))",
            "(var c (/ z a))",
        ]
    );
    assert!(result.has_errors());
    assert!(result.errors.iter().all(|error| error.is_syntax()));

    // `fun foo` is well formed and survives the broken declarations around it.
    assert!(result.body.iter().any(|expr| matches!(
        expr,
        Expr::FunctionDecl { name, .. } if name.lexeme() == "foo"
    )));
}

#[test]
fn test_error_isolation_end_to_end() {
    let source = "let = 1\nlet y = 2\n";
    let result = parse(tokenize(source).unwrap());

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.body.len(), 1);
    assert!(matches!(
        &result.body[0],
        Expr::VariableDecl { name, .. } if name.lexeme() == "y"
    ));

    let rendered = render_error(&result.errors[0], source, "broken.sp");
    assert_eq!(
        rendered,
        "Error: UnexpectedToken (Unexpected token: `=`, Expect variable name.)\n\
         -> broken.sp\n  |\n1 | let = 1\n  | ----^"
    );
}

#[test]
fn test_lexical_error_is_fatal() {
    let source = "let ok = 1\nlet s = \"never closed\n";
    let error = tokenize(source).unwrap_err();

    assert!(error.is_lexical());
    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!((error.get_position().line, error.get_position().column), (1, 8));
}

#[test]
fn test_precedence_end_to_end() {
    let result = parse(tokenize("1 + 2 * 3\n").unwrap());

    match &result.body[0] {
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            assert_eq!(operator.kind, TokenKind::Plus);
            assert_eq!(left.to_string(), "1");
            assert!(matches!(
                right.as_ref(),
                Expr::Binary { operator, .. } if operator.kind == TokenKind::Multiply
            ));
        }
        other => panic!("expected binary expression, got {other}"),
    }
}
