//! Calculator Error Types
//!
//! Defines every failure the stack engine can report.
//! None of these are fatal: the stack is left untouched and stays usable.

use thiserror::Error;

use crate::engine::value::Value;
use crate::ops::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    // Construction
    #[error("unable to create a stack of {capacity} values")]
    Allocation { capacity: usize },

    // Stack primitives
    #[error("stack is full ({capacity} values)")]
    StackFull { capacity: usize },
    #[error("stack is empty")]
    EmptyStack,

    // Operations
    #[error("'{op}' needs {required} operand(s), {available} on the stack")]
    InsufficientOperands {
        op: Operation,
        required: usize,
        available: usize,
    },
    #[error("'{op}' overflows the value range")]
    Overflow {
        op: Operation,
        lhs: Value,
        rhs: Option<Value>,
    },
    #[error("'{op}' by zero")]
    DivisionByZero { op: Operation },
    #[error("square root of {value}: complex numbers unsupported")]
    Domain { value: Value },
    #[error("shift amount {amount} is outside 0..{}", Value::BITS)]
    InvalidShift { amount: Value },
}

pub type CalcResult<T> = Result<T, CalcError>;
