use std::collections::HashSet;

use crate::value::{NodeId, Value};

/// Builds a topological order of the graph reachable from `root`.
///
/// Depth-first, children before the node itself, each node exactly once
/// (identity is the node's address, not its value). Every node therefore
/// appears after all of its inputs and `root` comes last.
///
/// The traversal keeps its own stack instead of recursing, so long chains
/// such as a loss accumulated over many samples cannot overflow the call
/// stack. The order is the one a recursive post-order DFS would produce.
pub fn topological_order(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, index of the next child to visit)
    let mut stack: Vec<(Value, usize)> = Vec::new();

    visited.insert(root.node_id());
    stack.push((root.clone(), 0));

    while let Some((node, next_child)) = stack.pop() {
        let child = node.read_data().children.get(next_child).cloned();
        match child {
            Some(child) => {
                stack.push((node, next_child + 1));
                if visited.insert(child.node_id()) {
                    stack.push((child, 0));
                }
            }
            None => sorted_list.push(node),
        }
    }

    sorted_list
}

/// Computes the gradient of `root` with respect to every node reachable
/// from it.
///
/// The root's gradient is set to 1.0, then each node's local-gradient rule
/// runs in reverse topological order (root first, leaves last), so a node
/// only propagates once all of its consumers have contributed to it.
///
/// Gradients of all other nodes are accumulated, never reset: call
/// `zero_grad` on the parameters before a new pass. No validation is done;
/// NaN and infinities propagate by ordinary floating-point rules.
pub fn backward(root: &Value) {
    let sorted_nodes = topological_order(root);
    log::trace!("backward: {} nodes reachable from root", sorted_nodes.len());

    root.set_grad(1.0);
    for node in sorted_nodes.iter().rev() {
        node.read_data().run_backward();
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
