/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed set of expression and declaration nodes
/// - printer: Parenthesised prefix rendering of nodes
pub mod ast;
pub mod printer;

#[cfg(test)]
mod tests;
