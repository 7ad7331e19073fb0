// src/value/accessors.rs
use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::{NodeId, Op};
use std::rc::Rc;

impl Value {
    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the accumulated gradient. Reads 0 until a backward pass reaches this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad.get()
    }

    pub fn id(&self) -> NodeId {
        self.read_data().id
    }

    /// Returns the tag of the operation that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Returns a clone of the `Rc` pointing to the backward rule (`grad_fn`).
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Returns handles to the operands that produced this node, in operand order.
    ///
    /// Empty for leaves. A node used twice by the same operation appears twice.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data()
            .grad_fn
            .as_ref()
            .map(|grad_fn| grad_fn.inputs())
            .unwrap_or_default()
    }

    /// Returns `true` for leaves created by [`Value::constant`].
    pub fn is_constant(&self) -> bool {
        self.read_data().is_constant
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }
}
