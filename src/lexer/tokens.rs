use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("var", TokenKind::Var);
        map.insert("fun", TokenKind::Fun);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("when", TokenKind::When);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    FloatingLiteral,
    StringLiteral,

    Plus,
    Minus,
    Multiply,
    Divide,
    Dot,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,

    Equal,
    GreaterThan,
    GreaterOrEqualThan,
    LowerThan,
    LowerOrEqualThan,
    Arrow,
    NewLine,

    // Reserved
    Let,
    Var,
    Fun,
    If,
    Else,
    When,
}

impl TokenKind {
    /// Source text of a fixed token, `None` for literal-bearing kinds.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::Identifier
            | TokenKind::IntegerLiteral
            | TokenKind::FloatingLiteral
            | TokenKind::StringLiteral => return None,
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Dot => ".",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Equal => "=",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterOrEqualThan => ">=",
            TokenKind::LowerThan => "<",
            TokenKind::LowerOrEqualThan => "<=",
            TokenKind::Arrow => "->",
            TokenKind::NewLine => "\\n",
            TokenKind::Let => "let",
            TokenKind::Var => "var",
            TokenKind::Fun => "fun",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::When => "when",
        };

        Some(symbol)
    }

    /// Keywords that usually open a new statement.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Let | TokenKind::Var | TokenKind::Fun | TokenKind::If | TokenKind::When
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_uppercase())
    }
}

/// Payload carried by literal-bearing tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Identifier(String),
    Integer(i32),
    Floating(f32),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token {
            kind,
            value: TokenValue::None,
            position,
        }
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The text this token stands for, used in diagnostics.
    pub fn lexeme(&self) -> String {
        match &self.value {
            TokenValue::None => self.kind.symbol().unwrap_or_default().to_string(),
            TokenValue::Identifier(name) => name.clone(),
            TokenValue::Integer(value) => value.to_string(),
            TokenValue::Floating(value) => format!("{:?}", value),
            TokenValue::String(value) => format!("\"{}\"", value),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "{}", self.kind),
            TokenValue::Identifier(name) => write!(f, "{}({})", self.kind, name),
            TokenValue::Integer(value) => write!(f, "{}({})", self.kind, value),
            TokenValue::Floating(value) => write!(f, "{}({:?})", self.kind, value),
            TokenValue::String(value) => write!(f, "{}(\"{}\")", self.kind, value),
        }
    }
}

/// Renders a token sequence for debugging.
///
/// Tokens are separated by spaces and every `NewLine` token becomes a line break.
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();

    for token in tokens {
        if token.kind == TokenKind::NewLine {
            out.push('\n');
        } else {
            out.push_str(&token.to_string());
            out.push(' ');
        }
    }

    out
}
