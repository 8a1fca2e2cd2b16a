//! Operation Definitions
//!
//! Defines the closed set of operations the calculator can apply.
//! This file contains no arithmetic.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Calculator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    SquareRoot,

    // Bitwise
    LeftShift,
    RightShift,
}

impl Operation {
    /// Every operation, in display order
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::SquareRoot,
        Operation::LeftShift,
        Operation::RightShift,
    ];

    /// Number of stack values consumed
    pub fn arity(self) -> usize {
        match self {
            Operation::SquareRoot => 1,
            _ => 2,
        }
    }

    /// Symbol typed by the user
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Modulo => "%",
            Operation::SquareRoot => "sqrt",
            Operation::LeftShift => "<<",
            Operation::RightShift => ">>",
        }
    }

    /// Convert a symbol to an operation
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Symbol that names no operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation '{0}'")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
