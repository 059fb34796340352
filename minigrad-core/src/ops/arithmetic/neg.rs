use crate::autograd::BackwardOp;
use crate::error::MiniGradError;
use crate::tensor::Tensor;
use std::ops::Neg;
use std::sync::Arc;

// --- Backward Operation ---

#[derive(Debug)]
struct NegBackward {
    input: Tensor,
}

impl BackwardOp for NegBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<Option<f64>>, MiniGradError> {
        Ok(vec![Some(-grad_output)])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Negates a value. Requires gradients when the input does.
pub fn neg_op(a: &Tensor) -> Tensor {
    crate::ops::apply_unary_op(
        a,
        |x| -x,
        |input, _, _| Arc::new(NegBackward { input }),
        "neg",
    )
}

impl Neg for &Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        neg_op(self)
    }
}

impl Neg for Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        neg_op(&self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
