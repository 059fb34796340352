use crate::autograd::BackwardOp;
use crate::error::MiniGradError;
use crate::tensor::Tensor;
use std::sync::Arc;

// --- MulBackward Definition ---

/// Backward pass structure for multiplication.
///
/// Product rule: \( \frac{dz}{da} = b \), \( \frac{dz}{db} = a \). The operand values are
/// captured at construction.
#[derive(Debug)]
struct MulBackward {
    a: Tensor,
    b: Tensor,
    a_value: f64,
    b_value: f64,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<Option<f64>>, MiniGradError> {
        Ok(vec![
            Some(grad_output * self.b_value),
            Some(grad_output * self.a_value),
        ])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Multiplies two values.
///
/// The output requires gradients when **either** operand does, so `x * 2.0` stays
/// differentiable (unlike `x + 2.0`).
pub fn mul_op(a: &Tensor, b: &Tensor) -> Tensor {
    crate::ops::apply_binary_op(
        a,
        b,
        |x, y| x * y,
        |a_rg, b_rg| a_rg || b_rg,
        |a, b| {
            let a_value = a.value();
            let b_value = b.value();
            Arc::new(MulBackward {
                a,
                b,
                a_value,
                b_value,
            })
        },
        "mul",
    )
}

/// `lhs * rhs` with a raw scalar on the left; same graph as `rhs * lhs`.
pub fn rmul_op(lhs: f64, rhs: &Tensor) -> Tensor {
    mul_op(rhs, &Tensor::scalar(lhs))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
