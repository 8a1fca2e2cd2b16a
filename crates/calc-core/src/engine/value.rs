//! Value Representation
//!
//! Every slot of the calculator stack holds one fixed-width signed integer.

/// Stack value
pub type Value = i64;

/// Smallest representable value
pub const VALUE_MIN: Value = Value::MIN;

/// Largest representable value
pub const VALUE_MAX: Value = Value::MAX;
