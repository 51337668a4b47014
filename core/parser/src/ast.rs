//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the expression tree produced by the parser.
//! CONTEXT: After the Lexer tokenizes an input string, the Parser converts
//! those tokens into this tree. The Evaluator then walks it post-order to
//! compute the final value.
//!
//! Every node is a token plus 0, 1 or 2 children:
//! - 0 children: numeric literal (text kept verbatim)
//! - 1 child:    prefix (unary) operator application
//! - 2 children: binary operator application, left operand first
//!
//! Parentheses are not kept; they only shape the tree.

/// Represents a parsed expression.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression {
    /// A numeric literal exactly as written, e.g. "42" or "3.14".
    Literal(String),

    /// A prefix operation: op operand (e.g., -5).
    UnaryOp {
        op: String,
        operand: Box<Expression>,
    },

    /// A binary operation: left op right (e.g., 5 + 3).
    BinaryOp {
        left: Box<Expression>,
        op: String,
        right: Box<Expression>,
    },
}

/// Whether an operator symbol appears in prefix or infix position.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Fixity {
    Prefix,
    Infix,
}

impl Expression {
    pub fn literal(text: impl Into<String>) -> Self {
        Expression::Literal(text.into())
    }

    pub fn unary(op: impl Into<String>, operand: Expression) -> Self {
        Expression::UnaryOp {
            op: op.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expression, op: impl Into<String>, right: Expression) -> Self {
        Expression::BinaryOp {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        }
    }

    /// The literal text or the operator symbol of this node.
    pub fn token(&self) -> &str {
        match self {
            Expression::Literal(text) => text,
            Expression::UnaryOp { op, .. } | Expression::BinaryOp { op, .. } => op,
        }
    }

    /// Child nodes in operand order.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Literal(_) => Vec::new(),
            Expression::UnaryOp { operand, .. } => vec![operand.as_ref()],
            Expression::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Number of children: 0, 1 or 2.
    pub fn arity(&self) -> usize {
        match self {
            Expression::Literal(_) => 0,
            Expression::UnaryOp { .. } => 1,
            Expression::BinaryOp { .. } => 2,
        }
    }

    /// Height of the tree; a literal has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Expression::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Renders the fully parenthesized form, e.g. `((10 - 3) - 2)`.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(text) => write!(f, "{}", text),
            Expression::UnaryOp { op, operand } => write!(f, "({}{})", op, operand),
            Expression::BinaryOp { left, op, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

impl std::fmt::Display for Fixity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fixity::Prefix => write!(f, "unary"),
            Fixity::Infix => write!(f, "binary"),
        }
    }
}
