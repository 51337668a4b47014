//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the expression parser.
//! CONTEXT: This crate exposes the operator table, lexer, parser, and AST
//! needed to turn an arithmetic expression string into a tree. Which
//! operators exist, and how tightly they bind, is decided at runtime by the
//! caller's OperatorTable.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Numeric literals: 42, 3.14
//! - Caller-defined binary operators, including multi-character ones (**)
//! - Left, right and non-associative operators
//! - Parentheses for grouping
//! - Prefix (unary) operators: -5, +5, --5

pub mod ast;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{Expression, Fixity};
pub use lexer::Lexer;
pub use operator::{Associativity, BinaryFn, BuiltinOperation, Operator, OperatorTable};
pub use parser::{parse, ParseError, ParseResult, Parser, DEFAULT_MAX_DEPTH};
pub use token::Token;
