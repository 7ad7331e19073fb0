// src/value/mod.rs

use crate::autograd::BackwardOp;
use crate::value_data::{Op, ValueData};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
mod debug;
mod traits;

/// A scalar node in the computation graph.
///
/// `Value` is a handle over `Rc<ValueData>`:
/// 1.  **Shared Ownership:** Cloning is O(1) and yields an alias of the same node, so
///     a node can be an operand of any number of consumers.
/// 2.  **Interior Mutability:** The gradient lives in a `Cell`, so the backward pass
///     writes through any alias and every other alias sees the result.
///
/// Because of `Rc`, a `Value` is neither `Send` nor `Sync`; a graph stays on the
/// thread that built it.
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<ValueData>,
}

impl Value {
    /// Creates a leaf node holding `value`, with gradient 0 and no operands.
    pub fn new(value: f64) -> Self {
        Value {
            data: Rc::new(ValueData::leaf(value, false)),
        }
    }

    /// Creates a leaf used as a fixed operand (exponents, scalar literals).
    ///
    /// Backward passes never add gradient into a constant; its `grad()` stays 0
    /// unless it is itself the root of a pass.
    pub fn constant(value: f64) -> Self {
        Value {
            data: Rc::new(ValueData::leaf(value, true)),
        }
    }

    /// Creates a non-leaf node from an already computed forward value and its
    /// backward rule.
    ///
    /// The built-in builders in [`crate::ops`] go through here; it is public so that
    /// callers can add operations of their own.
    pub fn from_op(value: f64, op: Op, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Value {
            data: Rc::new(ValueData::with_grad_fn(value, op, grad_fn)),
        }
    }

    pub(crate) fn read_data(&self) -> &ValueData {
        &self.data
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::new(value)
    }
}
