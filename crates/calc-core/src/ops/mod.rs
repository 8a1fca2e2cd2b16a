pub mod arith;
pub mod operation;

pub use operation::{Operation, UnknownOperation};
