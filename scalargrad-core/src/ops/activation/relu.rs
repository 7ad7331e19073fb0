use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Value,
    /// Whether the forward output was strictly positive.
    active: bool,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let mask = if self.active { 1.0 } else { 0.0 };
        vec![mask * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// The derivative at exactly 0 is taken as 0. A NaN input fails the `a > 0` test and
/// maps to 0, with a zero derivative.
pub fn relu_op(a: &Value) -> Value {
    let x = a.value();
    let out = if x > 0.0 { x } else { 0.0 };
    let backward_context = ReluBackward {
        input: a.clone(),
        active: out > 0.0,
    };
    Value::from_op(out, Op::Relu, Rc::new(backward_context))
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
