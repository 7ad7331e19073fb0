// src/value_data.rs
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::autograd::BackwardOp;

/// Global counter for generating unique node IDs.
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a node in the computation graph.
///
/// Assigned once at construction and never reused. Graph traversal keys on this,
/// never on the node's value: two nodes holding `2.0` are still two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        NodeId(NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Tag naming the operation that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Leaf node (input or constant).
    None,
    Add,
    Mul,
    /// Power with an exponent that receives no gradient.
    Pow,
    Relu,
    /// Operation supplied through [`Value::from_op`](crate::Value::from_op).
    Custom(&'static str),
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::None => write!(f, "none"),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow => write!(f, "**"),
            Op::Relu => write!(f, "ReLU"),
            Op::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Internal storage for a node.
///
/// Wrapped in `Rc<ValueData>` by [`Value`](crate::Value) so that every alias of a
/// node observes the same gradient. Only `grad` is mutable after construction.
#[derive(Debug)]
pub struct ValueData {
    pub(crate) id: NodeId,
    /// Forward result, computed eagerly by the builder.
    pub(crate) value: f64,
    /// Gradient accumulator. Starts at 0.
    pub(crate) grad: Cell<f64>,
    pub(crate) op: Op,
    /// Constant leaves never accumulate gradient.
    pub(crate) is_constant: bool,
    /// Backward rule linking this node to its operands. `None` for leaves.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl ValueData {
    pub(crate) fn leaf(value: f64, is_constant: bool) -> Self {
        ValueData {
            id: NodeId::next(),
            value,
            grad: Cell::new(0.0),
            op: Op::None,
            is_constant,
            grad_fn: None,
        }
    }

    pub(crate) fn with_grad_fn(value: f64, op: Op, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ValueData {
            id: NodeId::next(),
            value,
            grad: Cell::new(0.0),
            op,
            is_constant: false,
            grad_fn: Some(grad_fn),
        }
    }
}

impl Drop for ValueData {
    /// Unlinks the graph iteratively. The default drop glue recurses once per
    /// ancestor and overflows the stack on long chains.
    fn drop(&mut self) {
        let mut pending: Vec<Rc<dyn BackwardOp>> = self.grad_fn.take().into_iter().collect();
        while let Some(grad_fn) = pending.pop() {
            // Rules still referenced elsewhere are released by their last owner.
            if Rc::strong_count(&grad_fn) != 1 {
                continue;
            }
            let inputs = grad_fn.inputs();
            drop(grad_fn);
            for input in inputs {
                if let Ok(mut data) = Rc::try_unwrap(input.data) {
                    pending.extend(data.grad_fn.take());
                }
            }
        }
    }
}
