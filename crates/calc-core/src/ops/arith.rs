//! Checked Integer Arithmetic
//!
//! Every function validates its operands against the value range before
//! computing, so no operation here can wrap or panic.

use crate::engine::value::{Value, VALUE_MAX, VALUE_MIN};
use crate::error::{CalcError, CalcResult};

use super::operation::Operation;

fn overflow(op: Operation, lhs: Value, rhs: Option<Value>) -> CalcError {
    CalcError::Overflow { op, lhs, rhs }
}

pub fn add(x: Value, y: Value) -> CalcResult<Value> {
    if (y > 0 && x > VALUE_MAX - y) || (y < 0 && x < VALUE_MIN - y) {
        return Err(overflow(Operation::Add, x, Some(y)));
    }
    Ok(x + y)
}

pub fn subtract(x: Value, y: Value) -> CalcResult<Value> {
    if (y > 0 && x < VALUE_MIN + y) || (y < 0 && x > VALUE_MAX + y) {
        return Err(overflow(Operation::Subtract, x, Some(y)));
    }
    Ok(x - y)
}

pub fn multiply(x: Value, y: Value) -> CalcResult<Value> {
    // Divisions below truncate toward zero, which keeps each bound exact
    // for integer comparison.
    let overflows = if x == 0 || y == 0 {
        false
    } else if x > 0 {
        if y > 0 {
            x > VALUE_MAX / y
        } else {
            y < VALUE_MIN / x
        }
    } else if y > 0 {
        x < VALUE_MIN / y
    } else {
        x < VALUE_MAX / y
    };

    if overflows {
        return Err(overflow(Operation::Multiply, x, Some(y)));
    }
    Ok(x * y)
}

pub fn divide(x: Value, y: Value) -> CalcResult<Value> {
    if y == 0 {
        return Err(CalcError::DivisionByZero {
            op: Operation::Divide,
        });
    }
    if x == VALUE_MIN && y == -1 {
        return Err(overflow(Operation::Divide, x, Some(y)));
    }
    Ok(x / y)
}

pub fn modulo(x: Value, y: Value) -> CalcResult<Value> {
    if y == 0 {
        return Err(CalcError::DivisionByZero {
            op: Operation::Modulo,
        });
    }
    // MIN % -1 is 0 but traps on the hardware division.
    if y == -1 {
        return Ok(0);
    }
    Ok(x % y)
}

fn shift_amount(amount: Value) -> CalcResult<u32> {
    if !(0..Value::BITS as Value).contains(&amount) {
        return Err(CalcError::InvalidShift { amount });
    }
    Ok(amount as u32)
}

/// `x << y`, failing if any significant bit (sign included) would be lost
pub fn left_shift(x: Value, y: Value) -> CalcResult<Value> {
    let amount = shift_amount(y)?;
    if x < (VALUE_MIN >> amount) || x > (VALUE_MAX >> amount) {
        return Err(overflow(Operation::LeftShift, x, Some(y)));
    }
    Ok(x << amount)
}

/// Arithmetic `x >> y`, rounding toward negative infinity
pub fn right_shift(x: Value, y: Value) -> CalcResult<Value> {
    let amount = shift_amount(y)?;
    Ok(x >> amount)
}

pub fn square_root(x: Value) -> CalcResult<Value> {
    if x < 0 {
        return Err(CalcError::Domain { value: x });
    }
    Ok(isqrt(x))
}

/// Floor square root of a non-negative value by binary search on `[0, x]`.
///
/// A midpoint `m` is compared with `x / m` rather than squared, so the search
/// stays in range up to `VALUE_MAX`.
pub fn isqrt(x: Value) -> Value {
    debug_assert!(x >= 0);
    if x < 2 {
        return x;
    }

    // lo * lo <= x < hi * hi
    let mut lo: Value = 0;
    let mut hi: Value = x;
    while hi - lo > 1 {
        let m = lo + (hi - lo) / 2;
        let d = x / m;
        if m == d {
            return m;
        }
        if m > d {
            hi = m;
        } else {
            lo = m;
        }
    }
    lo
}
