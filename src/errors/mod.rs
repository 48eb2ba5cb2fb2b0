//! Error types and error handling for the front-end.
//!
//! This module defines the error types produced while lexing and parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexical and syntax phases
//! - Error names and suggestion tips used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;
