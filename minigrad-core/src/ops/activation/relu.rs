use crate::autograd::BackwardOp;
use crate::error::MiniGradError;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Rate at which the gradient flows through a relu whose input is strictly positive.
///
/// Not the derivative `1.0`: gradients through relu are halved.
pub const RELU_POSITIVE_SLOPE: f64 = 0.5;

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Tensor,
    input_value: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<Option<f64>>, MiniGradError> {
        let slope = if self.input_value > 0.0 {
            RELU_POSITIVE_SLOPE
        } else {
            0.0
        };
        Ok(vec![Some(grad_output * slope)])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Rectified linear unit: `max(0, x)`.
///
/// Backward multiplies the upstream gradient by [`RELU_POSITIVE_SLOPE`] for a strictly
/// positive input and by `0` otherwise (including at exactly `0`).
pub fn relu_op(a: &Tensor) -> Tensor {
    crate::ops::apply_unary_op(
        a,
        |x| if x > 0.0 { x } else { 0.0 },
        |input, input_value, _| Arc::new(ReluBackward { input, input_value }),
        "relu",
    )
}

impl Tensor {
    /// Applies the Rectified Linear Unit (ReLU) activation. See [`relu_op`].
    pub fn relu(&self) -> Tensor {
        relu_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
