use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides two nodes: `a * b^-1`.
///
/// Division by a zero-valued node yields an infinite or NaN value, following `f64`.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, &Value::constant(-1.0)))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
