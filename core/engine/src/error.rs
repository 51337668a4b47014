//! FILENAME: core/engine/src/error.rs

use opcalc_parser::{Fixity, ParseError};
use thiserror::Error;

/// Failures while reducing an expression tree to a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid numeric literal: {0}")]
    InvalidLiteral(String),

    #[error("Operator '{symbol}' has no {fixity} meaning")]
    UnknownOperatorEffect { symbol: String, fixity: Fixity },

    #[error("Operator '{symbol}' is undefined for {left} and {right}")]
    OperatorFailed { symbol: String, left: f64, right: f64 },

    #[error("Result {value} cannot be represented as {target}")]
    NotRepresentable { value: f64, target: &'static str },
}

/// Everything a single `Calculator::evaluate` call can fail with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Problems found while loading a calculator configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operator symbol must not be empty")]
    EmptySymbol,

    #[error("Operator symbol '{symbol}' contains reserved character {ch:?}")]
    ReservedCharacter { symbol: String, ch: char },

    #[error("Operator symbol '{0}' is defined more than once")]
    DuplicateSymbol(String),
}

pub type CalcResult<T> = Result<T, CalcError>;
