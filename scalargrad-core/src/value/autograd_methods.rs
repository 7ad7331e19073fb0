use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::NodeId;
use log::{debug, warn};
use std::collections::HashMap;

impl Value {
    /// Accumulates `grad_to_add` into this node's gradient. Constants stay at 0.
    pub(crate) fn acc_grad(&self, grad_to_add: f64) {
        let data = self.read_data();
        if data.is_constant {
            return;
        }
        data.grad.set(data.grad.get() + grad_to_add);
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) {
        self.read_data().grad.set(0.0);
    }

    /// Resets the gradient of this node and of every node it depends on.
    ///
    /// Gradients accumulate across backward passes; call this between passes when
    /// reusing the same graph (or the same parameter leaves) for another step.
    pub fn zero_grad_graph(&self) {
        let nodes = topological_sort(self);
        debug!("zero_grad_graph: resetting {} nodes", nodes.len());
        for node in &nodes {
            node.zero_grad();
        }
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Walks the topological order in reverse so that every consumer has finished
    /// contributing to a node before that node's rule runs. Each rule runs exactly
    /// once and receives the gradient gathered for its node during this pass.
    ///
    /// The pass's gradients are then added into every reachable node with `+=`, and
    /// this node's gradient is set to 1 (overwriting any previous value). Calling
    /// this twice without [`Value::zero_grad_graph`] therefore leaves every other
    /// node with exactly twice its single-pass gradient.
    ///
    /// # Errors
    /// Returns `ScalarGradError::GradientArityMismatch` if a backward rule returns a
    /// different number of gradients than it has inputs. The built-in operations
    /// never do. Node gradients are left untouched in that case.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        if self.grad() != 0.0 {
            warn!(
                "backward: root {:?} already holds gradient {}; gradients of its ancestors will accumulate",
                self.id(),
                self.grad()
            );
        }

        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} nodes reachable from {:?}",
            sorted_nodes.len(),
            self.id()
        );

        // Gradients of this pass only, keyed by node identity.
        let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
        grad_map.insert(self.id(), 1.0);

        for node in sorted_nodes.iter().rev() {
            let Some(grad_fn) = node.read_data().grad_fn.as_ref() else {
                continue;
            };

            let grad_output = grad_map.get(&node.id()).copied().unwrap_or(0.0);
            let input_grads = grad_fn.backward(grad_output);
            let inputs = grad_fn.inputs();
            if input_grads.len() != inputs.len() {
                return Err(ScalarGradError::GradientArityMismatch {
                    op: node.op(),
                    expected: inputs.len(),
                    actual: input_grads.len(),
                });
            }

            for (input, grad_to_add) in inputs.iter().zip(input_grads) {
                *grad_map.entry(input.id()).or_insert(0.0) += grad_to_add;
            }
        }

        for node in &sorted_nodes {
            if node.id() == self.id() {
                continue;
            }
            if let Some(&pass_grad) = grad_map.get(&node.id()) {
                node.acc_grad(pass_grad);
            }
        }
        self.read_data().grad.set(1.0);

        debug!("backward: done from {:?}", self.id());
        Ok(())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
