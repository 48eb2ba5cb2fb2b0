//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Declaration parsing (`let`/`var` variables, `fun` functions)
//! - Statement parsing (`if`/`else`, blocks, expression statements)
//! - Expression parsing (binary ops, unary minus, calls, literals)
//! - Error recovery: a failed declaration is reported and skipped
//!
//! Expressions are parsed with NUD (null denotation) and LED (left
//! denotation) functions, using binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
