//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and column tracking for every token
//! - Newlines as significant tokens, other whitespace skipped

pub mod lexer;
pub mod tokens;
