//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Re-exports public types and modules for use by other crates,
//! including the parser types a caller needs to build operator tables.

pub mod calculator;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod number;

// Re-export commonly used types at the crate root
pub use calculator::{Calculator, IntegerCalculator, RealCalculator};
pub use config::{CalculatorConfig, OperatorConfig};
pub use error::{CalcError, CalcResult, ConfigError, EvalError};
pub use evaluator::Evaluator;
pub use number::Number;
pub use opcalc_parser::{
    Associativity, BinaryFn, BuiltinOperation, Expression, Fixity, Operator, OperatorTable,
    ParseError, DEFAULT_MAX_DEPTH,
};
