//! Calculator Engine
//!
//! Owns the value stack and applies operations to its topmost values.
//! An operation either replaces its operands with a single result or
//! fails and leaves the stack exactly as it was.

use std::slice;

use crate::config::CalcConfig;
use crate::error::{CalcError, CalcResult};
use crate::ops::arith;
use crate::ops::Operation;

use super::stack::Stack;
use super::value::Value;

/// Stack calculator
#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalcConfig,
    stack: Stack,
}

impl Calculator {
    /// Create a calculator whose stack holds `capacity` values
    pub fn new(capacity: usize) -> CalcResult<Self> {
        Self::with_config(CalcConfig::new().with_stack_capacity(capacity))
    }

    /// Create a calculator from a configuration
    pub fn with_config(config: CalcConfig) -> CalcResult<Self> {
        let stack = Stack::new(config.stack_capacity)?;
        Ok(Calculator { config, stack })
    }

    /// Release the calculator and its stack
    pub fn destroy(self) {}

    /// Configuration the calculator was created with
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Maximum number of values on the stack
    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Number of values on the stack
    pub fn count(&self) -> usize {
        self.stack.len()
    }

    /// Number of values that can still be pushed
    pub fn space_left(&self) -> usize {
        self.stack.space_left()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Push value onto the stack
    pub fn push(&mut self, value: Value) -> CalcResult<()> {
        self.stack.push(value)
    }

    /// Pop value from the stack
    pub fn pop(&mut self) -> CalcResult<Value> {
        self.stack.pop()
    }

    /// Peek at the top of the stack without removing
    pub fn top(&self) -> CalcResult<Value> {
        self.stack.peek()
    }

    /// Remove up to `count` values from the top; 0 empties the stack.
    pub fn remove(&mut self, count: usize) -> usize {
        self.stack.remove(count)
    }

    /// Values bottom to top
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.stack.iter()
    }

    /// Underlying value stack
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Apply `op` to the top of the stack
    pub fn operate(&mut self, op: Operation) -> CalcResult<()> {
        match op {
            Operation::Add => self.binary(op, arith::add),
            Operation::Subtract => self.binary(op, arith::subtract),
            Operation::Multiply => self.binary(op, arith::multiply),
            Operation::Divide => self.binary(op, arith::divide),
            Operation::Modulo => self.binary(op, arith::modulo),
            Operation::LeftShift => self.binary(op, arith::left_shift),
            Operation::RightShift => self.binary(op, arith::right_shift),
            Operation::SquareRoot => self.unary(op, arith::square_root),
        }
    }

    fn insufficient(&self, op: Operation) -> CalcError {
        CalcError::InsufficientOperands {
            op,
            required: op.arity(),
            available: self.stack.len(),
        }
    }

    /// Replace `x` (below the top) and `y` (the top) with `f(x, y)`
    fn binary(
        &mut self,
        op: Operation,
        f: fn(Value, Value) -> CalcResult<Value>,
    ) -> CalcResult<()> {
        let (x, y) = self.stack.peek_pair().ok_or_else(|| self.insufficient(op))?;
        let result = f(x, y)?;
        self.stack.remove(2);
        self.stack.push(result)
    }

    /// Replace the top `x` with `f(x)`
    fn unary(&mut self, op: Operation, f: fn(Value) -> CalcResult<Value>) -> CalcResult<()> {
        let x = self.stack.peek().map_err(|_| self.insufficient(op))?;
        let result = f(x)?;
        self.stack.remove(1);
        self.stack.push(result)
    }
}

impl<'a> IntoIterator for &'a Calculator {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
