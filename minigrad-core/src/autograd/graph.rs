use crate::error::MiniGradError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use log::{debug, trace};
use std::collections::HashSet;
use std::sync::RwLock;

/// Identity of a node in the computation graph.
///
/// The address of the shared `RwLock<TensorData>`: every clone of a `Tensor` handle
/// yields the same `NodeId`, two distinct nodes never do while both are alive.
/// Only ever compared, never dereferenced.
pub type NodeId = *const RwLock<TensorData>;

/// Orders every node reachable from `root` through `parents` so that each node comes
/// after all of its ancestors (`root` is last).
///
/// Depth-first, post-order, parents visited in operand order. A node reachable
/// through several paths (diamond) appears once. The traversal keeps its own stack,
/// so long chains of operations do not grow the call stack.
pub(crate) fn topological_sort(root: &Tensor) -> Vec<Tensor> {
    let mut sorted: Vec<Tensor> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    // (node, its parents, index of the next parent to explore)
    let mut stack: Vec<(Tensor, Vec<Tensor>, usize)> = Vec::new();

    visited.insert(root.node_id());
    stack.push((root.clone(), root.parents(), 0));

    loop {
        let next_parent = match stack.last_mut() {
            None => break,
            Some((_, parents, next)) => {
                let parent = parents.get(*next).cloned();
                *next += 1;
                parent
            }
        };
        match next_parent {
            Some(parent) => {
                if visited.insert(parent.node_id()) {
                    let grand_parents = parent.parents();
                    stack.push((parent, grand_parents, 0));
                }
            }
            None => {
                if let Some((node, _, _)) = stack.pop() {
                    trace!("topological_sort: appending {:?} (op '{}')", node.node_id(), node.op());
                    sorted.push(node);
                }
            }
        }
    }
    sorted
}

/// Runs the backward pass rooted at `root`.
///
/// The root receives a gradient of `1.0`, then every node's `grad_fn` is invoked once,
/// root first, so that a node has received the contributions of all its consumers
/// before its own rule reads its gradient.
///
/// # Errors
/// `InvalidOperation` if `root` does not require gradients (checked before any
/// traversal), or if a `BackwardOp` returns a number of contributions different from
/// its number of inputs.
pub(crate) fn run_backward(root: &Tensor) -> Result<(), MiniGradError> {
    if !root.requires_grad() {
        return Err(MiniGradError::InvalidOperation(
            "backward() called on a value that does not require gradients".to_string(),
        ));
    }

    let sorted_nodes = topological_sort(root);
    debug!(
        "backward: {} node(s) reachable from root (op '{}')",
        sorted_nodes.len(),
        root.op()
    );

    root.acc_grad(1.0);

    for node in sorted_nodes.iter().rev() {
        // Release the read guard before calling into the op: it accumulates into
        // other nodes and may need write access.
        let (grad_fn, grad) = {
            let guard = node.read_data();
            (guard.grad_fn.clone(), guard.grad)
        };
        let Some(op) = grad_fn else {
            continue; // leaf
        };
        let Some(grad_output) = grad else {
            trace!("backward: skipping {:?}, gradient never seeded", node.node_id());
            continue;
        };

        let input_grads = op.backward(grad_output)?;
        let inputs = op.inputs();
        if input_grads.len() != inputs.len() {
            return Err(MiniGradError::InvalidOperation(format!(
                "BackwardOp returned {} gradients, but expected {} (for op: {:?})",
                input_grads.len(),
                inputs.len(),
                op
            )));
        }

        for (input, grad_to_add) in inputs.iter().zip(input_grads) {
            if let Some(delta) = grad_to_add {
                input.acc_grad(delta);
            }
        }
    }

    debug!("backward: done");
    Ok(())
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
