use crate::lexer::tokens::Token;

/// Node Types
///
/// Mirrors the variants of [`Expr`] without their payload.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Binary,
    Unary,
    Literal,
    Grouping,
    Variable,
    Assign,
    VariableDecl,
    FunctionDecl,
    If,
    Call,
    Block,
}

/// A node of the syntax tree.
///
/// Declarations and statements share this type with expressions. Every node
/// owns its children; tokens are embedded by value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Unary {
        operator: Token,
        expr: Box<Expr>,
    },
    /// Integer, floating and string literals
    Literal {
        value: Token,
    },
    Grouping {
        expression: Box<Expr>,
    },
    Variable {
        name: Token,
    },
    Assign {
        name: Token,
        value: Box<Expr>,
    },
    /// `let` or `var` declaration; `mutable` is set for `var`
    VariableDecl {
        name: Token,
        initializer: Option<Box<Expr>>,
        mutable: bool,
    },
    FunctionDecl {
        name: Token,
        params: Vec<Token>,
        body: Vec<Expr>,
    },
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Block {
        statements: Vec<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token, expr: Expr) -> Self {
        Expr::Unary {
            operator,
            expr: Box::new(expr),
        }
    }

    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping {
            expression: Box::new(expression),
        }
    }

    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Binary { .. } => ExprType::Binary,
            Expr::Unary { .. } => ExprType::Unary,
            Expr::Literal { .. } => ExprType::Literal,
            Expr::Grouping { .. } => ExprType::Grouping,
            Expr::Variable { .. } => ExprType::Variable,
            Expr::Assign { .. } => ExprType::Assign,
            Expr::VariableDecl { .. } => ExprType::VariableDecl,
            Expr::FunctionDecl { .. } => ExprType::FunctionDecl,
            Expr::If { .. } => ExprType::If,
            Expr::Call { .. } => ExprType::Call,
            Expr::Block { .. } => ExprType::Block,
        }
    }

    /// Number of nodes in this tree, including itself.
    pub fn node_count(&self) -> usize {
        let children: usize = match self {
            Expr::Binary { left, right, .. } => left.node_count() + right.node_count(),
            Expr::Unary { expr, .. } => expr.node_count(),
            Expr::Literal { .. } | Expr::Variable { .. } => 0,
            Expr::Grouping { expression } => expression.node_count(),
            Expr::Assign { value, .. } => value.node_count(),
            Expr::VariableDecl { initializer, .. } => {
                initializer.as_ref().map_or(0, |init| init.node_count())
            }
            Expr::FunctionDecl { body, .. } => body.iter().map(Expr::node_count).sum(),
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => {
                condition.node_count()
                    + then_branch.node_count()
                    + else_branch.as_ref().map_or(0, |branch| branch.node_count())
            }
            Expr::Call { callee, arguments } => {
                callee.node_count() + arguments.iter().map(Expr::node_count).sum::<usize>()
            }
            Expr::Block { statements } => statements.iter().map(Expr::node_count).sum(),
        };

        children + 1
    }
}
