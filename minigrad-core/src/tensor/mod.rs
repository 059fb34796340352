// src/tensor/mod.rs

use crate::autograd::graph::NodeId;
use crate::tensor_data::TensorData;
use std::fmt;
use std::sync::{Arc, RwLock};

mod autograd_methods;

/// A differentiable scalar: one node of the computation graph.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally to allow for:
/// 1.  **Shared Ownership:** the same node can be an operand of many operations and
///     still be held by the caller (cheap clones, no copy of the node).
/// 2.  **Interior Mutability:** the gradient is accumulated through a shared
///     reference during the backward pass.
///
/// Two handles are the *same node* when they point to the same `TensorData`
/// (see [`Tensor::node_id`]). Equal values do not make equal nodes.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a leaf value.
    ///
    /// When `requires_grad` is set the gradient starts at `Some(0.0)`, otherwise it
    /// stays `None` for the lifetime of the node.
    pub fn new(value: f64, requires_grad: bool) -> Self {
        Tensor::from_data(TensorData::new(value, requires_grad))
    }

    /// Creates a leaf value that does not take part in differentiation.
    ///
    /// This is what raw `f64` operands are turned into by the built-in operations.
    pub fn scalar(value: f64) -> Self {
        Tensor::new(value, false)
    }

    /// Attaches a label to this value, returned by [`Tensor::name`] and shown by `Display`.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.write_data().name = Some(name.into());
        self
    }

    pub(crate) fn from_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        }
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the diagnostic op tag (`"leaf"`, `"add"`, `"mul"`, a custom function name, ...).
    pub fn op(&self) -> String {
        self.read_data().op.to_string()
    }

    /// Returns the label attached with [`Tensor::with_name`], if any.
    pub fn name(&self) -> Option<String> {
        self.read_data().name.clone()
    }

    /// Returns handles to the grad-requiring operands this value was computed from.
    pub fn parents(&self) -> Vec<Tensor> {
        self.read_data().parents.clone()
    }

    /// Whether this value was created directly rather than produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Identity of the underlying node, stable across clones of the handle.
    pub fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    /// Whether `self` and `other` are handles to the same node.
    pub fn same_node(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Acquires a read lock on the node.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> std::sync::RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }
}

impl Clone for Tensor {
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data), // Clone the Arc, not the TensorData
        }
    }
}

impl From<f64> for Tensor {
    fn from(value: f64) -> Self {
        Tensor::scalar(value)
    }
}

impl fmt::Debug for Tensor {
    // Parents are summarized by count; printing them would walk the whole graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Tensor")
            .field("value", &guard.value)
            .field("grad", &guard.grad)
            .field("requires_grad", &guard.requires_grad)
            .field("op", &guard.op)
            .field("name", &guard.name)
            .field("parents", &guard.parents.len())
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Tensor(data={:?}", guard.value)?;
        match guard.grad {
            Some(g) => write!(f, ", grad={:?}", g)?,
            None => write!(f, ", grad=None")?,
        }
        write!(f, ", requires_grad={}", guard.requires_grad)?;
        if let Some(name) = &guard.name {
            write!(f, ", name={}", name)?;
        }
        write!(f, ")")
    }
}
