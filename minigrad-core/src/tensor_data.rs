// src/tensor_data.rs
use std::borrow::Cow;
use std::sync::{Arc, PoisonError};

use crate::autograd::BackwardOp;
use crate::tensor::Tensor;

/// Op tag carried by values created directly by the user.
pub const LEAF_OP: &str = "leaf";

/// Internal storage and metadata for a [`Tensor`].
///
/// This struct holds the forward value together with the autograd bookkeeping.
/// It is wrapped in `Arc<RwLock<TensorData>>` by `Tensor` so that handles are cheap to
/// clone and the gradient can be accumulated through a shared reference.
#[derive(Debug)]
pub struct TensorData {
    /// The forward-computed scalar. Never mutated after construction.
    pub(crate) value: f64,

    // --- Autograd Metadata ---
    /// Whether gradients are accumulated into this node. Fixed at creation.
    pub(crate) requires_grad: bool,
    /// Accumulated gradient. Always `None` when `requires_grad` is false.
    pub(crate) grad: Option<f64>,
    /// Operands that produced this node and themselves require gradients,
    /// deduplicated by identity and kept in operand order.
    pub(crate) parents: Vec<Tensor>,
    /// Local gradient rule installed by the operation that produced this node.
    /// Leaves have `grad_fn = None`.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp>>,
    /// Diagnostic label, e.g. `"add"` or the name of a custom function.
    pub(crate) op: Cow<'static, str>,
    /// Optional user-facing label.
    pub(crate) name: Option<String>,
}

impl TensorData {
    /// Creates the payload of a leaf node.
    ///
    /// The gradient starts at `Some(0.0)` when `requires_grad` is set, `None` otherwise.
    pub fn new(value: f64, requires_grad: bool) -> Self {
        TensorData {
            value,
            requires_grad,
            grad: if requires_grad { Some(0.0) } else { None },
            parents: Vec::new(),
            grad_fn: None,
            op: Cow::Borrowed(LEAF_OP),
            name: None,
        }
    }

    /// Creates the payload of a node produced by an operation.
    ///
    /// `parents` is filtered down to the operands that require gradients and
    /// deduplicated, so `x * x` records `x` once.
    pub(crate) fn from_op(
        value: f64,
        requires_grad: bool,
        operands: &[&Tensor],
        grad_fn: Arc<dyn BackwardOp>,
        op: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut parents: Vec<Tensor> = Vec::with_capacity(operands.len());
        for operand in operands {
            if operand.requires_grad() && !parents.iter().any(|p| p.same_node(operand)) {
                parents.push((*operand).clone());
            }
        }
        TensorData {
            value,
            requires_grad,
            grad: if requires_grad { Some(0.0) } else { None },
            parents,
            grad_fn: Some(grad_fn),
            op: op.into(),
            name: None,
        }
    }

    /// Adds `delta` to the gradient, initializing it to `0.0` first if it is unset.
    /// No-op when the node does not require gradients.
    pub(crate) fn accumulate(&mut self, delta: f64) {
        if !self.requires_grad {
            return;
        }
        self.grad = Some(self.grad.unwrap_or(0.0) + delta);
    }

    /// Whether this node was created directly rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

impl Drop for TensorData {
    /// Releases the ancestors through a worklist instead of nested drops, so freeing a
    /// long chain of operations does not overflow the stack.
    fn drop(&mut self) {
        let mut pending: Vec<Tensor> = std::mem::take(&mut self.parents);
        if let Some(op) = self.grad_fn.take() {
            pending.extend(op.inputs());
        }
        while let Some(tensor) = pending.pop() {
            // Shared nodes are released by their last owner.
            let Ok(lock) = Arc::try_unwrap(tensor.data) else {
                continue;
            };
            let mut node = lock.into_inner().unwrap_or_else(PoisonError::into_inner);
            pending.append(&mut node.parents);
            if let Some(op) = node.grad_fn.take() {
                // Operands are queued before the op lets go of them.
                pending.extend(op.inputs());
            }
        }
    }
}
