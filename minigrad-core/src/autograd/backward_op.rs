use crate::error::MiniGradError;
use crate::tensor::Tensor;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Any operation that creates a node from other nodes installs a `BackwardOp` in the
/// output's `grad_fn`. During `backward()` the driver hands it the output's accumulated
/// gradient and routes the returned contributions to the operands.
///
/// The trait requires `Debug + Send + Sync` so that `Arc<dyn BackwardOp>` can live in a
/// `Tensor`, which is itself `Send + Sync`.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes the gradient contribution for each operand, given \( \frac{dL}{dOut} \).
    ///
    /// # Returns
    /// * `Ok(Vec<Option<f64>>)`: one entry per tensor returned by [`BackwardOp::inputs`],
    ///    in the same order. `None` means "no contribution" and is skipped.
    /// * `Err(MiniGradError)`: if the rule cannot produce a contribution per operand.
    fn backward(&self, grad_output: f64) -> Result<Vec<Option<f64>>, MiniGradError>;

    /// Returns every operand of the forward call, in positional order, including those
    /// that do not require gradients. Accumulation into the latter is a no-op.
    fn inputs(&self) -> Vec<Tensor>;
}
