use crate::ops::arithmetic::{add_op, neg_op};
use crate::tensor::Tensor;

/// Subtracts `b` from `a`, built as `a + (-b)`.
///
/// No dedicated backward rule: the graph holds a `neg` node feeding an `add` node, so
/// the output follows the addition rule and requires gradients only when both
/// operands do.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Tensor {
    add_op(a, &neg_op(b))
}

/// `lhs - rhs` with a raw scalar on the left: the scalar becomes a non-differentiable
/// leaf, then `leaf + (-rhs)`.
pub fn rsub_op(lhs: f64, rhs: &Tensor) -> Tensor {
    sub_op(&Tensor::scalar(lhs), rhs)
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
