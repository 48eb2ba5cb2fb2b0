//! Renders nodes in a parenthesised prefix form, e.g. `(+ 1 (* 2 3))`.

use std::fmt::{Display, Formatter, Result};

use crate::lexer::tokens::Token;

use super::ast::Expr;

fn write_list(f: &mut Formatter<'_>, items: &[Expr]) -> Result {
    for item in items {
        write!(f, " {}", item)?;
    }
    Ok(())
}

fn write_names(f: &mut Formatter<'_>, names: &[Token]) -> Result {
    let names: Vec<String> = names.iter().map(Token::lexeme).collect();
    write!(f, "({})", names.join(" "))
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme(), left, right),
            Expr::Unary { operator, expr } => write!(f, "({} {})", operator.lexeme(), expr),
            Expr::Literal { value } => write!(f, "{}", value.lexeme()),
            Expr::Grouping { expression } => write!(f, "(group {})", expression),
            Expr::Variable { name } => write!(f, "{}", name.lexeme()),
            Expr::Assign { name, value } => write!(f, "(assign {} {})", name.lexeme(), value),
            Expr::VariableDecl {
                name,
                initializer,
                mutable,
            } => {
                let keyword = if *mutable { "var" } else { "let" };
                match initializer {
                    Some(initializer) => {
                        write!(f, "({} {} {})", keyword, name.lexeme(), initializer)
                    }
                    None => write!(f, "({} {})", keyword, name.lexeme()),
                }
            }
            Expr::FunctionDecl { name, params, body } => {
                write!(f, "(fun {} ", name.lexeme())?;
                write_names(f, params)?;
                write_list(f, body)?;
                write!(f, ")")
            }
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => match else_branch {
                Some(else_branch) => {
                    write!(f, "(if {} {} {})", condition, then_branch, else_branch)
                }
                None => write!(f, "(if {} {})", condition, then_branch),
            },
            Expr::Call { callee, arguments } => {
                write!(f, "(call {}", callee)?;
                write_list(f, arguments)?;
                write!(f, ")")
            }
            Expr::Block { statements } => {
                write!(f, "(block")?;
                write_list(f, statements)?;
                write!(f, ")")
            }
        }
    }
}
