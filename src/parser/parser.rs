//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Binary operators are parsed by precedence climbing driven by NUD/LED
//! handler tables; declarations and statements are dispatched through
//! their own tables keyed by the leading token.
//!
//! It maintains lookup tables for:
//! - Declaration handlers
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_declaration,
};

/// How deep declarations, statements and expressions may nest before the
/// parser gives up on the enclosing declaration.
pub const MAX_DEPTH: usize = 256;

const NESTED_TOO_DEEPLY: &str = "Nesting too deep.";

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for parsing
/// declarations, statements and expressions. It tracks the current
/// position in the token stream and provides methods for token consumption.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the next token to consume
    pos: usize,
    /// Lookup table for declaration handlers (`let`, `var`, `fun`)
    decl_lookup: StmtLookup,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Number of `nested` calls currently on the stack
    depth: usize,
}

/// The outcome of a parse: every declaration that parsed, plus one error
/// per abandoned declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub body: Vec<Expr>,
    pub errors: Vec<Error>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Parser {
    /// Creates a new Parser over `tokens` with empty lookup tables.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|pos| self.tokens.get(pos))
    }

    /// Advances past the current token and returns it.
    ///
    /// At the end of input nothing moves and the last token is returned.
    pub fn advance(&mut self) -> Option<&Token> {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.is_at_end()
    }

    /// Index of the next token to consume.
    pub fn get_index(&self) -> usize {
        self.pos
    }

    /// True if the current token has the given kind. Payloads are ignored.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Consumes the current token if it has one of the given kinds.
    pub fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        let matched = self
            .current_token()
            .is_some_and(|token| token.is_one_of_many(kinds));
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes a token of the expected kind or fails with `message`.
    pub fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, Error> {
        if !self.check(kind) {
            return Err(self.error(message));
        }

        let token = self.advance().cloned();
        token.ok_or_else(|| self.error(message))
    }

    /// Consumes and returns the current token, failing at end of input.
    pub fn advance_token(&mut self, message: &str) -> Result<Token, Error> {
        match self.current_token_kind() {
            Some(kind) => self.consume(kind, message),
            None => Err(self.error(message)),
        }
    }

    /// Builds a syntax error at the current token.
    pub fn error(&self, message: &str) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.lexeme(),
                    message: String::from(message),
                },
                token.position,
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEof {
                    message: String::from(message),
                },
                self.get_position(),
            ),
        }
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails at the current token once [`MAX_DEPTH`] levels are open, so
    /// deeply nested input becomes a syntax error instead of exhausting the
    /// stack.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(NESTED_TOO_DEEPLY));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Current nesting level.
    pub fn get_depth(&self) -> usize {
        self.depth
    }

    /// Skips blank lines.
    pub fn skip_newlines(&mut self) {
        while self.matches(&[TokenKind::NewLine]) {}
    }

    /// Discards tokens up to the next likely statement boundary.
    ///
    /// Always consumes at least one token when any remain, then stops after a
    /// `NewLine` or before a token that opens a statement.
    pub fn synchronize(&mut self) {
        let start = self.pos;
        self.advance();

        while !self.is_at_end() {
            if self.previous().map(|token| token.kind) == Some(TokenKind::NewLine) {
                break;
            }

            match self.current_token_kind() {
                Some(kind) if kind.starts_statement() => break,
                _ => {
                    self.advance();
                }
            }
        }

        trace!(skipped = self.pos - start, "synchronized");
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &StmtLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a declaration handler for a token.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: StmtHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Position of the current token, or of the last token at end of input.
    pub fn get_position(&self) -> Position {
        self.current_token()
            .or_else(|| self.tokens.last())
            .map(|token| token.position)
            .unwrap_or_default()
    }
}

/// Parses a token sequence into its top-level declarations.
///
/// A declaration that fails to parse is reported, its remaining tokens are
/// skipped with [`Parser::synchronize`], and parsing resumes with the next
/// declaration. Syntax errors never abort the call.
pub fn parse(tokens: Vec<Token>) -> ParseResult {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut body = vec![];
    let mut errors = vec![];

    loop {
        parser.skip_newlines();
        if !parser.has_tokens() {
            break;
        }

        match parse_declaration(&mut parser) {
            Ok(declaration) => {
                trace!(kind = ?declaration.get_expr_type(), "parsed declaration");
                body.push(declaration);
            }
            Err(error) => {
                warn!(%error, "syntax error");
                errors.push(error);
                parser.synchronize();
            }
        }
    }

    debug!(
        declarations = body.len(),
        nodes = body.iter().map(Expr::node_count).sum::<usize>(),
        errors = errors.len(),
        "parsed token stream"
    );

    ParseResult { body, errors }
}
