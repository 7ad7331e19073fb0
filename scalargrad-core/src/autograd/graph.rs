use crate::value::Value;
use crate::value_data::NodeId;
use log::trace;
use std::collections::HashSet;

/// Builds a topological ordering of every node reachable from `root`.
///
/// Post-order DFS: each node is emitted only after all of its operands, so operands
/// come before their consumers and `root` is last. `backward()` walks the result in
/// reverse. Nodes are marked visited by [`NodeId`] before their operands are pushed,
/// so a node reached through several paths is emitted exactly once.
///
/// Uses an explicit work stack; graph depth is bounded by heap, not call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // `true` marks a node whose operands have already been pushed.
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            trace!("[topological_sort] Emitting node {:?}", node.id());
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            trace!("[topological_sort] Node {:?} already visited.", node.id());
            continue;
        }

        let inputs = node.operands();
        trace!(
            "[topological_sort] Visiting node {:?} ({} operands)",
            node.id(),
            inputs.len()
        );
        stack.push((node, true));
        // Reversed so the first operand is expanded first.
        for input in inputs.into_iter().rev() {
            if !visited.contains(&input.id()) {
                stack.push((input, false));
            }
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
