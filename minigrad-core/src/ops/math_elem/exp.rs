// minigrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::error::MiniGradError;
use crate::tensor::Tensor;
use std::sync::Arc;

// --- ExpBackward Definition ---

/// Backward pass structure for \( z = e^a \).
///
/// \( \frac{dz}{da} = e^a = z \), so only the forward output needs to be kept.
#[derive(Debug)]
struct ExpBackward {
    input: Tensor,
    output_value: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<Option<f64>>, MiniGradError> {
        Ok(vec![Some(grad_output * self.output_value)])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }
}

// --- exp_op Implementation ---

/// Computes \( e^x \).
///
/// Overflows to `+inf` for large inputs like any `f64` exponential.
pub fn exp_op(a: &Tensor) -> Tensor {
    crate::ops::apply_unary_op(
        a,
        f64::exp,
        |input, _, output_value| Arc::new(ExpBackward { input, output_value }),
        "exp",
    )
}

impl Tensor {
    /// Exponential. See [`exp_op`].
    pub fn exp(&self) -> Tensor {
        exp_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
