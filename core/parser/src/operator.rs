//! FILENAME: core/parser/src/operator.rs
//! PURPOSE: The runtime operator table that drives tokenizing, parsing and reduction.
//! CONTEXT: The caller decides which symbols exist, how tightly they bind and
//! what they compute. The lexer matches symbols against this table, the parser
//! reads precedence/associativity from it, and the evaluator calls `apply`.
//!
//! The table is built once and never mutated while expressions are evaluated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Binary reduction function. `None` means the operation is undefined for
/// the given operands.
pub type BinaryFn = fn(f64, f64) -> Option<f64>;

/// How a chain of operators with the same precedence is grouped.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    #[default]
    Left,
    /// `a ** b ** c` groups as `a ** (b ** c)`.
    Right,
    /// Chaining is rejected; parentheses are required.
    None,
}

/// A single operator entry: precedence, grouping and reduction function.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    pub precedence: i32,
    pub associativity: Associativity,
    pub apply: BinaryFn,
}

impl Operator {
    pub fn new(precedence: i32, associativity: Associativity, apply: BinaryFn) -> Self {
        Operator {
            precedence,
            associativity,
            apply,
        }
    }

    /// Shorthand for a left-associative operator.
    pub fn left(precedence: i32, apply: BinaryFn) -> Self {
        Self::new(precedence, Associativity::Left, apply)
    }

    /// Shorthand for a right-associative operator.
    pub fn right(precedence: i32, apply: BinaryFn) -> Self {
        Self::new(precedence, Associativity::Right, apply)
    }
}

/// Named reduction functions, used where an operator has to be described
/// as data (configuration files).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Remainder,
    Min,
    Max,
}

impl BuiltinOperation {
    /// Returns the reduction function for this operation.
    /// Division and remainder follow IEEE semantics, so a zero divisor
    /// produces infinity or NaN rather than a failure.
    pub fn function(self) -> BinaryFn {
        match self {
            BuiltinOperation::Add => add,
            BuiltinOperation::Subtract => subtract,
            BuiltinOperation::Multiply => multiply,
            BuiltinOperation::Divide => divide,
            BuiltinOperation::Power => power,
            BuiltinOperation::Remainder => remainder,
            BuiltinOperation::Min => min,
            BuiltinOperation::Max => max,
        }
    }
}

fn add(a: f64, b: f64) -> Option<f64> {
    Some(a + b)
}

fn subtract(a: f64, b: f64) -> Option<f64> {
    Some(a - b)
}

fn multiply(a: f64, b: f64) -> Option<f64> {
    Some(a * b)
}

fn divide(a: f64, b: f64) -> Option<f64> {
    Some(a / b)
}

fn power(a: f64, b: f64) -> Option<f64> {
    Some(a.powf(b))
}

fn remainder(a: f64, b: f64) -> Option<f64> {
    Some(a % b)
}

fn min(a: f64, b: f64) -> Option<f64> {
    Some(a.min(b))
}

fn max(a: f64, b: f64) -> Option<f64> {
    Some(a.max(b))
}

/// Mapping from operator symbol to its [`Operator`].
///
/// Symbols may be several characters long. No consistency checks happen
/// here: zero or negative precedences and symbols that can never be lexed
/// are all accepted.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    operators: HashMap<String, Operator>,
    /// Symbols ordered longest first, so that lexing prefers `**` over `*`.
    by_length: Vec<String>,
}

impl OperatorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four arithmetic operators: `+ -` at 10 and `* /` at 20, all left-associative.
    pub fn standard() -> Self {
        OperatorTable::new()
            .with("+", Operator::left(10, BuiltinOperation::Add.function()))
            .with("-", Operator::left(10, BuiltinOperation::Subtract.function()))
            .with("*", Operator::left(20, BuiltinOperation::Multiply.function()))
            .with("/", Operator::left(20, BuiltinOperation::Divide.function()))
    }

    /// The standard table plus `%` (remainder, 20, left) and `**` (power, 30, right).
    pub fn scientific() -> Self {
        Self::standard()
            .with("%", Operator::left(20, BuiltinOperation::Remainder.function()))
            .with("**", Operator::right(30, BuiltinOperation::Power.function()))
    }

    /// Adds or replaces the operator registered under `symbol`.
    pub fn insert(&mut self, symbol: impl Into<String>, operator: Operator) {
        let symbol = symbol.into();
        if self.operators.insert(symbol.clone(), operator).is_none() {
            self.by_length.push(symbol);
            // Longest first; ties broken alphabetically to keep matching deterministic
            self.by_length
                .sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, symbol: impl Into<String>, operator: Operator) -> Self {
        self.insert(symbol, operator);
        self
    }

    pub fn get(&self, symbol: &str) -> Option<&Operator> {
        self.operators.get(symbol)
    }

    /// Precedence of `symbol`, or 0 when the symbol is not an operator.
    pub fn precedence(&self, symbol: &str) -> i32 {
        self.get(symbol).map_or(0, |op| op.precedence)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Registered symbols, longest first.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.by_length.iter().map(String::as_str)
    }

    /// Returns the longest registered symbol that `text` starts with.
    pub fn match_at(&self, text: &str) -> Option<&str> {
        self.symbols()
            .find(|symbol| !symbol.is_empty() && text.starts_with(*symbol))
    }
}
