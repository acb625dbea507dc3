use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Logarithm,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Logarithm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::SquareRoot => "square_root",
            Operation::Logarithm => "logarithm",
        }
    }

    /// Number of operands the operation consumes.
    pub fn arity(self) -> usize {
        match self {
            Operation::SquareRoot | Operation::Logarithm => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "*" | "x" => Ok(Operation::Multiply),
            "divide" | "div" | "/" => Ok(Operation::Divide),
            "power" | "pow" | "^" => Ok(Operation::Power),
            "square_root" | "sqrt" => Ok(Operation::SquareRoot),
            "logarithm" | "ln" | "log" => Ok(Operation::Logarithm),
            other => Err(format!("unknown operation: {}", other)),
        }
    }
}

/// A completed calculation, as reported by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub operands: Vec<f64>,
    pub result: f64,
}
