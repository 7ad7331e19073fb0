use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

/// Backward operation context for `base ^ exponent`.
///
/// The exponent is listed as an operand so the graph records it, but it is
/// treated as a constant and always receives 0.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: Value,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let x = self.base.value();
        let p = self.exponent.value();
        vec![p * x.powf(p - 1.0) * grad_output, 0.0]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone(), self.exponent.clone()]
    }
}

/// Raises `base` to the value of `exponent`.
///
/// Follows `f64::powf`: a negative base with a fractional exponent yields NaN,
/// which propagates rather than failing.
pub fn pow_op(base: &Value, exponent: &Value) -> Value {
    let backward_context = PowBackward {
        base: base.clone(),
        exponent: exponent.clone(),
    };
    Value::from_op(
        base.value().powf(exponent.value()),
        Op::Pow,
        Rc::new(backward_context),
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
