//! # Differentiable Operations Module (`ops`)
//!
//! Built-in operations on [`Tensor`] values, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`, `relu_op`, ...)
//!   that computes the forward value and installs the backward rule. The `std::ops`
//!   operator traits and the `Tensor` methods delegate to them.
//! - **`Backward` Structs:** each operation has a struct (e.g. `AddBackward`) implementing
//!   [`BackwardOp`], capturing the operands and whatever forward values the local
//!   derivative needs.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, neg (plus `f64` operands on either side).
//! - [`activation`]: relu.
//! - [`math_elem`]: exp, sin.

use crate::autograd::BackwardOp;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::sync::Arc;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// Applies a unary operation to a value.
///
/// The output requires gradients exactly when the input does. The backward rule is
/// always installed; it has no effect while the output's gradient is `None`.
///
/// # Arguments
/// * `a`: The input value.
/// * `op_fn`: The forward function.
/// * `backward_builder`: Builds the `BackwardOp` from the input handle, the input value
///   and the output value.
/// * `op_name`: Op tag of the output.
pub(crate) fn apply_unary_op<F, B>(
    a: &Tensor,
    op_fn: F,
    backward_builder: B,
    op_name: &'static str,
) -> Tensor
where
    F: Fn(f64) -> f64,
    B: FnOnce(Tensor, f64, f64) -> Arc<dyn BackwardOp>,
{
    let (input_value, requires_grad) = {
        let a_guard = a.read_data();
        (a_guard.value, a_guard.requires_grad)
    };
    let output_value = op_fn(input_value);
    let grad_fn = backward_builder(a.clone(), input_value, output_value);
    Tensor::from_data(TensorData::from_op(
        output_value,
        requires_grad,
        &[a],
        grad_fn,
        op_name,
    ))
}

/// Applies a binary operation to two values.
///
/// `requires_grad_rule` combines the operands' flags: addition uses AND, multiplication OR.
pub(crate) fn apply_binary_op<F, R, B>(
    a: &Tensor,
    b: &Tensor,
    op_fn: F,
    requires_grad_rule: R,
    backward_builder: B,
    op_name: &'static str,
) -> Tensor
where
    F: Fn(f64, f64) -> f64,
    R: Fn(bool, bool) -> bool,
    B: FnOnce(Tensor, Tensor) -> Arc<dyn BackwardOp>,
{
    let (a_value, a_requires_grad) = {
        let guard = a.read_data();
        (guard.value, guard.requires_grad)
    };
    // `a` and `b` may be the same node; never hold both guards at once.
    let (b_value, b_requires_grad) = {
        let guard = b.read_data();
        (guard.value, guard.requires_grad)
    };

    let output_value = op_fn(a_value, b_value);
    let requires_grad = requires_grad_rule(a_requires_grad, b_requires_grad);
    let grad_fn = backward_builder(a.clone(), b.clone());
    Tensor::from_data(TensorData::from_op(
        output_value,
        requires_grad,
        &[a, b],
        grad_fn,
        op_name,
    ))
}
