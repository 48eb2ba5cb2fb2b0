#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text.
///
/// Both fields are 0-based and counted in characters. `column` is the offset
/// from the first character after the most recent newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Returns the text of the given 0-based line, without its line terminator.
pub fn get_line_at_position(source: &str, position: Position) -> Option<&str> {
    source
        .split('\n')
        .nth(position.line as usize)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `=`, Expect variable name.)
/// -> main.sp
///   |
/// 1 | let = 1
///   | ----^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(source, *position).unwrap_or("");

    let line_string = (position.line + 1).to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    println!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
