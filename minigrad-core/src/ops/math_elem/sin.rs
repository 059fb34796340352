use crate::autograd::BackwardOp;
use crate::error::MiniGradError;
use crate::tensor::Tensor;
use std::sync::Arc;

#[derive(Debug)]
struct SinBackward {
    input: Tensor,
    input_value: f64,
}

impl BackwardOp for SinBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<Option<f64>>, MiniGradError> {
        Ok(vec![Some(grad_output * self.input_value.cos())])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }
}

/// Computes \( \sin(x) \); backward multiplies by \( \cos(x) \).
pub fn sin_op(a: &Tensor) -> Tensor {
    crate::ops::apply_unary_op(
        a,
        f64::sin,
        |input, input_value, _| Arc::new(SinBackward { input, input_value }),
        "sin",
    )
}

impl Tensor {
    /// Sine. See [`sin_op`].
    pub fn sin(&self) -> Tensor {
        sin_op(self)
    }
}

#[cfg(test)]
#[path = "sin_test.rs"]
mod tests;
