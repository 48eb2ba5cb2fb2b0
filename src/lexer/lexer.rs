use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer<'_>, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("lexer patterns are valid regexes"),
        handler,
    }
}

lazy_static! {
    // Tried in order at every position; all patterns are anchored.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        pattern("^->", MK_DEFAULT_HANDLER!(TokenKind::Arrow)),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus)),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Multiply)),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Divide)),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::LParen)),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::RParen)),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::LBrace)),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::RBrace)),
        pattern("^\\[", MK_DEFAULT_HANDLER!(TokenKind::LBracket)),
        pattern("^\\]", MK_DEFAULT_HANDLER!(TokenKind::RBracket)),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Equal)),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::GreaterThan)),
        pattern("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot)),
        pattern("^\n", newline_handler),
        pattern("^[ \t\r]+", skip_handler),
        pattern("^\"[^\"]*\"", string_handler),
        pattern("^\"", unterminated_string_handler),
        pattern("^[0-9]+(\\.[0-9]*)?", number_handler),
        pattern("^\\p{L}[\\p{L}\\p{Nd}]*", symbol_handler),
    ];
}

/// Scanning state for a single `tokenize` call.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    /// Byte offset into `source`
    pos: usize,
    /// Characters consumed so far
    offset: u32,
    line: u32,
    /// Value of `offset` just after the most recent newline
    line_start: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            offset: 0,
            line: 0,
            line_start: 0,
        }
    }

    /// Moves past `matched`, which must be the text at the current position.
    pub fn advance(&mut self, matched: &str) {
        self.pos += matched.len();
        self.offset += matched.chars().count() as u32;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.offset - self.line_start)
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn newline_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), Error> {
    let position = lexer.position();
    lexer.push(Token::new(TokenKind::NewLine, position));
    lexer.advance(matched);

    lexer.line += 1;
    lexer.line_start = lexer.offset;
    Ok(())
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), Error> {
    lexer.advance(matched);
    Ok(())
}

fn string_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), Error> {
    // Contents are taken verbatim, there are no escape sequences.
    let string_literal = &matched[1..matched.len() - 1];

    let position = lexer.position();
    lexer.push(MK_TOKEN!(
        TokenKind::StringLiteral,
        TokenValue::String(String::from(string_literal)),
        position
    ));

    lexer.advance(matched);

    // A string may span lines without emitting `NewLine` tokens, but later
    // positions still count the lines it covers.
    if let Some(last) = matched.rfind('\n') {
        lexer.line += matched.matches('\n').count() as u32;
        lexer.line_start = lexer.offset - matched[last + 1..].chars().count() as u32;
    }
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer<'_>, _matched: &str) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, lexer.position()))
}

fn number_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), Error> {
    let position = lexer.position();
    let parse_error = || {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            position,
        )
    };

    let token = if matched.contains('.') {
        let value: f32 = matched.parse().map_err(|_| parse_error())?;
        MK_TOKEN!(TokenKind::FloatingLiteral, TokenValue::Floating(value), position)
    } else {
        let value: i32 = matched.parse().map_err(|_| parse_error())?;
        MK_TOKEN!(TokenKind::IntegerLiteral, TokenValue::Integer(value), position)
    };

    lexer.push(token);
    lexer.advance(matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), Error> {
    let position = lexer.position();

    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        lexer.push(MK_TOKEN!(*kind, TokenValue::None, position));
    } else {
        lexer.push(MK_TOKEN!(
            TokenKind::Identifier,
            TokenValue::Identifier(String::from(matched)),
            position
        ));
    }

    lexer.advance(matched);
    Ok(())
}

/// Converts source text into its token sequence.
///
/// Scanning is a single left-to-right pass. The first lexical error aborts
/// the whole call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    'scan: while !lex.at_eof() {
        let remainder = lex.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                (pattern.handler)(&mut lex, found.as_str())?;
                continue 'scan;
            }
        }

        let character = lex.at().unwrap_or_default();
        return Err(Error::new(
            ErrorImpl::UnexpectedCharacter { character },
            lex.position(),
        ));
    }

    debug!(
        tokens = lex.tokens.len(),
        lines = lex.line + 1,
        "tokenized source"
    );
    Ok(lex.tokens)
}
