//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates parsed expression trees to a real number.
//! CONTEXT: After an expression is parsed into a tree, this module walks it
//! post-order and computes the result in f64. Binary nodes are reduced with
//! the `apply` function registered for their symbol in the OperatorTable.
//!
//! SUPPORTED FEATURES:
//! - Literal evaluation (text parsed as f64)
//! - Unary operations: + (identity), - (negation)
//! - Binary operations: any symbol in the OperatorTable
//! - IEEE semantics: 1/0 is infinity, 0/0 is NaN, neither is an error

use crate::error::EvalError;
use opcalc_parser::{Expression, Fixity, OperatorTable};

/// The expression evaluator.
/// Holds a reference to the operator table for binary reductions.
pub struct Evaluator<'a> {
    operators: &'a OperatorTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(operators: &'a OperatorTable) -> Self {
        Evaluator { operators }
    }

    /// Evaluates an expression and returns the result.
    pub fn evaluate(&self, expr: &Expression) -> Result<f64, EvalError> {
        match expr {
            Expression::Literal(text) => self.eval_literal(text),
            Expression::UnaryOp { op, operand } => self.eval_unary_op(op, operand),
            Expression::BinaryOp { left, op, right } => self.eval_binary_op(left, op, right),
        }
    }

    fn eval_literal(&self, text: &str) -> Result<f64, EvalError> {
        text.parse::<f64>()
            .map_err(|_| EvalError::InvalidLiteral(text.to_string()))
    }

    fn eval_unary_op(&self, op: &str, operand: &Expression) -> Result<f64, EvalError> {
        let value = self.evaluate(operand)?;

        match op {
            "+" => Ok(value),
            "-" => Ok(-value),
            _ => Err(EvalError::UnknownOperatorEffect {
                symbol: op.to_string(),
                fixity: Fixity::Prefix,
            }),
        }
    }

    fn eval_binary_op(
        &self,
        left: &Expression,
        op: &str,
        right: &Expression,
    ) -> Result<f64, EvalError> {
        let left_val = self.evaluate(left)?;
        let right_val = self.evaluate(right)?;

        let operator = self
            .operators
            .get(op)
            .ok_or_else(|| EvalError::UnknownOperatorEffect {
                symbol: op.to_string(),
                fixity: Fixity::Infix,
            })?;

        (operator.apply)(left_val, right_val).ok_or_else(|| EvalError::OperatorFailed {
            symbol: op.to_string(),
            left: left_val,
            right: right_val,
        })
    }
}
