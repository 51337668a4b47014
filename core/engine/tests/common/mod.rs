//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for engine integration tests.

#![allow(dead_code)]

use opcalc_engine::{
    Associativity, BuiltinOperation, CalcError, IntegerCalculator, Operator, OperatorTable,
    RealCalculator,
};

/// Pair of calculators sharing one operator table.
pub struct TestHarness {
    pub real: RealCalculator,
    pub integer: IntegerCalculator,
}

impl TestHarness {
    /// Harness over the standard `{+:10, -:10, *:20, /:20}` table.
    pub fn new() -> Self {
        Self::with_table(OperatorTable::standard())
    }

    /// Harness over the standard table plus `%` and right-associative `**`.
    pub fn scientific() -> Self {
        Self::with_table(OperatorTable::scientific())
    }

    /// Harness with a non-associative comparison operator `<` at precedence 5.
    pub fn with_comparison() -> Self {
        Self::with_table(comparison_table())
    }

    pub fn with_table(table: OperatorTable) -> Self {
        TestHarness {
            real: RealCalculator::new(table.clone()),
            integer: IntegerCalculator::new(table),
        }
    }

    pub fn real(&self, input: &str) -> f64 {
        self.real
            .evaluate(input)
            .unwrap_or_else(|e| panic!("{:?} failed: {}", input, e))
    }

    pub fn integer(&self, input: &str) -> i64 {
        self.integer
            .evaluate(input)
            .unwrap_or_else(|e| panic!("{:?} failed: {}", input, e))
    }

    pub fn real_err(&self, input: &str) -> CalcError {
        match self.real.evaluate(input) {
            Ok(value) => panic!("{:?} unexpectedly evaluated to {}", input, value),
            Err(e) => e,
        }
    }

    pub fn integer_err(&self, input: &str) -> CalcError {
        match self.integer.evaluate(input) {
            Ok(value) => panic!("{:?} unexpectedly evaluated to {}", input, value),
            Err(e) => e,
        }
    }
}

/// `<` yields 1.0 when the left operand is smaller, else 0.0.
fn less_than(a: f64, b: f64) -> Option<f64> {
    Some(if a < b { 1.0 } else { 0.0 })
}

pub fn comparison_table() -> OperatorTable {
    OperatorTable::standard().with("<", Operator::new(5, Associativity::None, less_than))
}

/// The table used by the reference demonstrations, built the long way.
pub fn demonstration_table() -> OperatorTable {
    let mut table = OperatorTable::new();
    table.insert("+", Operator::left(10, BuiltinOperation::Add.function()));
    table.insert("-", Operator::left(10, BuiltinOperation::Subtract.function()));
    table.insert("*", Operator::left(20, BuiltinOperation::Multiply.function()));
    table.insert("/", Operator::left(20, BuiltinOperation::Divide.function()));
    table
}
