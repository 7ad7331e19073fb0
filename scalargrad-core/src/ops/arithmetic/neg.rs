use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negates a node: `a * -1`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::constant(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
