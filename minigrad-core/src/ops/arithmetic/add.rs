// minigrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::MiniGradError;
use crate::tensor::Tensor;
use std::sync::Arc;

// --- AddBackward Definition ---

/// Backward pass structure for addition.
///
/// \( \frac{dz}{da} = \frac{dz}{db} = 1 \): the upstream gradient is passed unchanged
/// to both operands.
#[derive(Debug)]
struct AddBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<Option<f64>>, MiniGradError> {
        Ok(vec![Some(grad_output), Some(grad_output)])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Adds two values.
///
/// The output requires gradients only when **both** operands do. An expression such
/// as `x + 2.0` is therefore not differentiable, and an operand that requires gradients
/// but is added to a constant is pruned from any graph built on top of the sum.
pub fn add_op(a: &Tensor, b: &Tensor) -> Tensor {
    crate::ops::apply_binary_op(
        a,
        b,
        |x, y| x + y,
        |a_rg, b_rg| a_rg && b_rg,
        |a, b| Arc::new(AddBackward { a, b }),
        "add",
    )
}

/// `lhs + rhs` with a raw scalar on the left; same graph as `rhs + lhs`.
pub fn radd_op(lhs: f64, rhs: &Tensor) -> Tensor {
    add_op(rhs, &Tensor::scalar(lhs))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
