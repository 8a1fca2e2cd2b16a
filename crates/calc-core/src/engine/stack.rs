//! Calculator Stack Implementation
//!
//! Bounded stack of values with a capacity fixed at creation.
//! No arithmetic semantics.

use std::fmt;
use std::slice;

use crate::error::{CalcError, CalcResult};
use super::value::Value;

/// Fixed-capacity value stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    values: Vec<Value>,
    capacity: usize,
}

impl Stack {
    /// Create an empty stack able to hold `capacity` values.
    ///
    /// The whole backing storage is reserved up front so pushes never
    /// reallocate.
    pub fn new(capacity: usize) -> CalcResult<Self> {
        if capacity == 0 {
            return Err(CalcError::Allocation { capacity });
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(capacity)
            .map_err(|_| CalcError::Allocation { capacity })?;

        Ok(Stack { values, capacity })
    }

    /// Maximum number of values
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values that can still be pushed
    pub fn space_left(&self) -> usize {
        self.capacity - self.values.len()
    }

    /// Push value onto stack
    pub fn push(&mut self, value: Value) -> CalcResult<()> {
        if self.values.len() >= self.capacity {
            return Err(CalcError::StackFull {
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// Pop value from stack
    pub fn pop(&mut self) -> CalcResult<Value> {
        self.values.pop().ok_or(CalcError::EmptyStack)
    }

    /// Peek at top of stack without removing
    pub fn peek(&self) -> CalcResult<Value> {
        self.values.last().copied().ok_or(CalcError::EmptyStack)
    }

    /// Peek at the two topmost values as `(below, top)`
    pub(crate) fn peek_pair(&self) -> Option<(Value, Value)> {
        match self.values.as_slice() {
            [.., x, y] => Some((*x, *y)),
            _ => None,
        }
    }

    /// Remove up to `count` values from the top.
    ///
    /// A `count` of 0, or one larger than the stack, empties the stack.
    /// Returns how many values were removed.
    pub fn remove(&mut self, count: usize) -> usize {
        let len = self.values.len();
        let count = if count == 0 || count > len { len } else { count };
        self.values.truncate(len - count);
        count
    }

    /// Occupied slots, bottom to top
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Occupied slots as a slice, bottom first
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Values separated by single spaces, bottom first: "1 2 3"
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
