pub mod calculator;
pub mod stack;
pub mod value;

pub use calculator::Calculator;
pub use stack::Stack;
pub use value::{Value, VALUE_MAX, VALUE_MIN};
