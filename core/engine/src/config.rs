//! FILENAME: core/engine/src/config.rs
//! PURPOSE: Operator tables described as data (JSON).
//! CONTEXT: Programmatic OperatorTables accept anything. Configuration files
//! are checked before use: symbols must be non-empty, unique, and must not
//! contain characters the lexer reads as something else (digits, '.',
//! whitespace, parentheses).
//!
//! FORMAT:
//! {
//!   "maxDepth": 128,
//!   "operators": [
//!     { "symbol": "+", "precedence": 10, "associativity": "left", "function": "add" }
//!   ]
//! }

use crate::error::ConfigError;
use log::warn;
use opcalc_parser::{Associativity, BuiltinOperation, Operator, OperatorTable, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single operator entry in a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorConfig {
    pub symbol: String,
    pub precedence: i32,
    #[serde(default)]
    pub associativity: Associativity,
    pub function: BuiltinOperation,
}

impl OperatorConfig {
    pub fn new(
        symbol: impl Into<String>,
        precedence: i32,
        associativity: Associativity,
        function: BuiltinOperation,
    ) -> Self {
        OperatorConfig {
            symbol: symbol.into(),
            precedence,
            associativity,
            function,
        }
    }

    fn to_operator(&self) -> Operator {
        Operator::new(self.precedence, self.associativity, self.function.function())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.symbol.is_empty() {
            return Err(ConfigError::EmptySymbol);
        }
        if let Some(ch) = self.symbol.chars().find(|&ch| is_reserved(ch)) {
            return Err(ConfigError::ReservedCharacter {
                symbol: self.symbol.clone(),
                ch,
            });
        }
        Ok(())
    }
}

/// Characters the lexer never reads as part of an operator symbol.
fn is_reserved(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_whitespace() || matches!(ch, '.' | '(' | ')')
}

/// Calculator settings: recursion bound plus operator table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    pub operators: Vec<OperatorConfig>,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl CalculatorConfig {
    /// The configuration equivalent of [`OperatorTable::standard`].
    pub fn standard() -> Self {
        CalculatorConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            operators: vec![
                OperatorConfig::new("+", 10, Associativity::Left, BuiltinOperation::Add),
                OperatorConfig::new("-", 10, Associativity::Left, BuiltinOperation::Subtract),
                OperatorConfig::new("*", 20, Associativity::Left, BuiltinOperation::Multiply),
                OperatorConfig::new("/", 20, Associativity::Left, BuiltinOperation::Divide),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every operator entry and rejects duplicate symbols.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for operator in &self.operators {
            if let Err(e) = operator.validate() {
                warn!("rejecting operator {:?}: {}", operator.symbol, e);
                return Err(e);
            }
            if !seen.insert(operator.symbol.as_str()) {
                warn!("rejecting operator {:?}: duplicate symbol", operator.symbol);
                return Err(ConfigError::DuplicateSymbol(operator.symbol.clone()));
            }
        }
        Ok(())
    }

    /// Validates and builds the operator table.
    pub fn to_table(&self) -> Result<OperatorTable, ConfigError> {
        self.validate()?;
        let mut table = OperatorTable::new();
        for operator in &self.operators {
            table.insert(operator.symbol.as_str(), operator.to_operator());
        }
        Ok(table)
    }

    /// Like [`to_table`](Self::to_table), but moves the symbols into the table.
    pub fn into_table(self) -> Result<OperatorTable, ConfigError> {
        self.validate()?;
        let mut table = OperatorTable::new();
        for operator in self.operators {
            let entry = operator.to_operator();
            table.insert(operator.symbol, entry);
        }
        Ok(table)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}
