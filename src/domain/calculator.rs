//! Stateless floating-point calculator.
//!
//! Every operation is a pure function over `f64`. Domain violations are
//! returned as [`SampleError`] values at the call site; nothing is logged
//! or retried here.

use crate::domain::model::Operation;
use crate::utils::error::{Result, SampleError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Fails with [`SampleError::DivideByZero`] when `b` is zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(SampleError::DivideByZero { dividend: a });
        }
        Ok(a / b)
    }

    /// `base` raised to `exponent` with `powf` semantics.
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    pub fn square_root(&self, value: f64) -> Result<f64> {
        if value < 0.0 {
            return Err(SampleError::InvalidArgument {
                operation: Operation::SquareRoot.name(),
                value,
                reason: "value must not be negative".to_string(),
            });
        }
        Ok(value.sqrt())
    }

    /// Natural logarithm. Fails for zero and negative input.
    pub fn logarithm(&self, value: f64) -> Result<f64> {
        if value <= 0.0 {
            return Err(SampleError::InvalidArgument {
                operation: Operation::Logarithm.name(),
                value,
                reason: "value must be greater than zero".to_string(),
            });
        }
        Ok(value.ln())
    }

    /// Dispatches `operation` over `operands`, which must match its arity.
    pub fn evaluate(&self, operation: Operation, operands: &[f64]) -> Result<f64> {
        match (operation, operands) {
            (Operation::Add, &[a, b]) => Ok(self.add(a, b)),
            (Operation::Subtract, &[a, b]) => Ok(self.subtract(a, b)),
            (Operation::Multiply, &[a, b]) => Ok(self.multiply(a, b)),
            (Operation::Divide, &[a, b]) => self.divide(a, b),
            (Operation::Power, &[base, exponent]) => Ok(self.power(base, exponent)),
            (Operation::SquareRoot, &[value]) => self.square_root(value),
            (Operation::Logarithm, &[value]) => self.logarithm(value),
            _ => Err(SampleError::OperandCount {
                operation: operation.name(),
                expected: operation.arity(),
                actual: operands.len(),
            }),
        }
    }
}
