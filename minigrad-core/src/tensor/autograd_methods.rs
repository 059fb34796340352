use crate::autograd::graph::run_backward;
use crate::autograd::BackwardOp;
use crate::error::MiniGradError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::sync::Arc;

impl Tensor {
    /// Checks if this value accumulates gradients.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Returns the accumulated gradient.
    ///
    /// Always `None` for values that do not require gradients. For the others it is
    /// `Some(0.0)` after creation and `None` after [`Tensor::zero_grad`], until the next
    /// accumulation.
    pub fn grad(&self) -> Option<f64> {
        self.read_data().grad
    }

    /// Returns a clone of the `Arc` pointing to the backward operation node (`grad_fn`).
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Accumulates `delta` into the gradient.
    ///
    /// No-op for values that do not require gradients. An unset gradient is initialized
    /// to `0.0` before the addition, so contributions from several paths simply sum.
    pub fn acc_grad(&self, delta: f64) {
        self.write_data().accumulate(delta);
    }

    /// Resets the gradient to `None` (not `0.0`). No-op for values that do not require
    /// gradients.
    pub fn zero_grad(&self) {
        let mut guard = self.write_data();
        if guard.requires_grad {
            guard.grad = None;
        }
    }

    /// Creates a new leaf with the same value, `requires_grad` flag and name, but no
    /// graph history. Gradients computed through the copy never reach `self`.
    pub fn detach(&self) -> Tensor {
        let guard = self.read_data();
        let mut detached_data = TensorData::new(guard.value, guard.requires_grad);
        detached_data.name = guard.name.clone();
        Tensor::from_data(detached_data)
    }

    /// Computes the gradients of this value with respect to every grad-requiring ancestor.
    ///
    /// # Errors
    /// Returns `MiniGradError::InvalidOperation` if:
    /// * this value does not require gradients.
    /// * a custom function's backward rule returns a number of gradients that does not
    ///   match its number of inputs.
    pub fn backward(&self) -> Result<(), MiniGradError> {
        run_backward(self)
    }

    /// Same as [`Tensor::backward`]; `seed` is accepted for API compatibility.
    ///
    /// The root always receives a gradient of `1.0` whatever `seed` is.
    pub fn backward_with_seed(&self, seed: f64) -> Result<(), MiniGradError> {
        if seed != 1.0 {
            log::warn!("backward_with_seed({}) ignores its seed; the root receives 1.0", seed);
        }
        run_backward(self)
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
