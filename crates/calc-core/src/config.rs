//! Calculator Configuration
//!
//! Defines the limits of a calculator instance.
//! Configuration specifies constraints only; enforcement is handled by the engine.

/// Stack capacity used when none is requested.
pub const DEFAULT_STACK_CAPACITY: usize = 64;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcConfig {
    /// Number of values the stack can hold. Must be greater than 0.
    pub stack_capacity: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

impl CalcConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the stack capacity
    pub fn with_stack_capacity(mut self, stack_capacity: usize) -> Self {
        self.stack_capacity = stack_capacity;
        self
    }
}
