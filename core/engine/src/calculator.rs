//! FILENAME: core/engine/src/calculator.rs
//! PURPOSE: The public entry point: string in, number out.
//! CONTEXT: A Calculator binds a number type and an operator table, then
//! runs Parser --> Evaluator --> Number conversion for every input. It holds
//! no mutable state, so a single instance can be shared across threads.

use crate::config::CalculatorConfig;
use crate::error::{CalcResult, ConfigError, EvalError};
use crate::evaluator::Evaluator;
use crate::number::Number;
use log::{debug, trace};
use opcalc_parser::{Expression, OperatorTable, ParseResult, Parser, DEFAULT_MAX_DEPTH};
use std::marker::PhantomData;

/// Evaluates expression strings to `N`.
#[derive(Debug, Clone)]
pub struct Calculator<N: Number = f64> {
    operators: OperatorTable,
    max_depth: usize,
    number: PhantomData<fn() -> N>,
}

/// Calculator producing `f64` results.
pub type RealCalculator = Calculator<f64>;

/// Calculator producing `i64` results, truncated toward zero.
pub type IntegerCalculator = Calculator<i64>;

impl<N: Number> Calculator<N> {
    /// Creates a calculator over `operators`. The table is not validated.
    pub fn new(operators: OperatorTable) -> Self {
        Calculator {
            operators,
            max_depth: DEFAULT_MAX_DEPTH,
            number: PhantomData,
        }
    }

    /// Calculator over [`OperatorTable::standard`].
    pub fn standard() -> Self {
        Self::new(OperatorTable::standard())
    }

    /// Overrides the parser recursion bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builds a calculator from a loaded configuration.
    pub fn from_config(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.to_table()?).with_max_depth(config.max_depth))
    }

    /// Builds a calculator from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = CalculatorConfig::from_json(json)?;
        let max_depth = config.max_depth;
        Ok(Self::new(config.into_table()?).with_max_depth(max_depth))
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses `input` without evaluating it.
    pub fn parse(&self, input: &str) -> ParseResult<Expression> {
        Parser::new(input, &self.operators)
            .with_max_depth(self.max_depth)
            .parse()
    }

    /// Reduces an already parsed tree and converts it to `N`.
    pub fn evaluate_expression(&self, expr: &Expression) -> Result<N, EvalError> {
        let value = Evaluator::new(&self.operators).evaluate(expr)?;
        N::from_real(value)
    }

    /// Parses and evaluates `input`.
    pub fn evaluate(&self, input: &str) -> CalcResult<N> {
        debug!("evaluate<{}>: {:?}", N::NAME, input);

        let result: CalcResult<N> = self
            .parse(input)
            .map_err(Into::into)
            .and_then(|expr| {
                trace!("parsed {:?} as {}", input, expr);
                self.evaluate_expression(&expr).map_err(Into::into)
            });

        match &result {
            Ok(value) => debug!("evaluate<{}>: {:?} = {:?}", N::NAME, input, value),
            Err(e) => debug!("evaluate<{}>: {:?} failed: {}", N::NAME, input, e),
        }
        result
    }
}

impl<N: Number> Default for Calculator<N> {
    fn default() -> Self {
        Self::standard()
    }
}
