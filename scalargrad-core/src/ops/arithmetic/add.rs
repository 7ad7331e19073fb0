// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for AddBackward {
    // d(a + b)/da = d(a + b)/db = 1
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Adds two nodes: `a + b`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let backward_context = AddBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Value::from_op(a.value() + b.value(), Op::Add, Rc::new(backward_context))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
