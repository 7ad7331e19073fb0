use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication.
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // grad_a = grad_output * b ; grad_b = grad_output * a
        vec![
            self.b.value() * grad_output,
            self.a.value() * grad_output,
        ]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Multiplies two nodes: `a * b`.
///
/// `a` and `b` may be the same node; each position still receives its own
/// contribution, giving `2 * a` for `a * a`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let backward_context = MulBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Value::from_op(a.value() * b.value(), Op::Mul, Rc::new(backward_context))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
