use crate::autograd::BackwardOp;
use crate::error::MiniGradError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use log::debug;
use std::fmt::Debug;
use std::sync::Arc;

/// Per-call storage shared by a custom function's `forward` and `backward`.
///
/// A fresh `Context` is created by every [`Function::apply`] and ends up owned by the
/// backward op of the output, so it lives exactly as long as that pairing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Context {
    saved_values: Vec<f64>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves values needed by `backward`. Saving again overwrites the previous values.
    pub fn save_for_backward(&mut self, values: &[f64]) {
        self.saved_values = values.to_vec();
    }

    /// Values stored by the last [`Context::save_for_backward`], empty if none.
    pub fn saved_values(&self) -> &[f64] {
        &self.saved_values
    }
}

/// An argument of [`Function::apply`]: a graph node or a raw scalar.
#[derive(Debug, Clone)]
pub enum Operand {
    Tensor(Tensor),
    Scalar(f64),
}

impl Operand {
    /// The raw value handed to `forward`.
    pub fn value(&self) -> f64 {
        match self {
            Operand::Tensor(t) => t.value(),
            Operand::Scalar(v) => *v,
        }
    }

    /// The tensor behind this operand, if it is one.
    pub fn as_tensor(&self) -> Option<&Tensor> {
        match self {
            Operand::Tensor(t) => Some(t),
            Operand::Scalar(_) => None,
        }
    }

    /// Whether the operand is a tensor that requires gradients.
    pub fn requires_grad(&self) -> bool {
        self.as_tensor().is_some_and(Tensor::requires_grad)
    }

    /// Converts to a tensor, turning a raw scalar into a non-differentiable leaf.
    pub fn to_tensor(&self) -> Tensor {
        match self {
            Operand::Tensor(t) => t.clone(),
            Operand::Scalar(v) => Tensor::scalar(*v),
        }
    }
}

impl From<Tensor> for Operand {
    fn from(t: Tensor) -> Self {
        Operand::Tensor(t)
    }
}

impl From<&Tensor> for Operand {
    fn from(t: &Tensor) -> Self {
        Operand::Tensor(t.clone())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Scalar(v)
    }
}

/// A user-defined differentiable operator.
///
/// `forward` and `backward` work on raw `f64` values, never on graph nodes; the graph
/// bookkeeping is done by [`Function::apply`]. Values needed at backward time are passed
/// through the [`Context`].
///
/// ```
/// use minigrad_core::{Context, Function, MiniGradError, Tensor};
/// use minigrad_core::autograd::function::expect_arity;
///
/// #[derive(Debug)]
/// struct Cube;
///
/// impl Function for Cube {
///     fn name(&self) -> &'static str {
///         "Cube"
///     }
///
///     fn forward(&self, ctx: &mut Context, inputs: &[f64]) -> Result<f64, MiniGradError> {
///         expect_arity(self.name(), inputs, 1)?;
///         ctx.save_for_backward(inputs);
///         Ok(inputs[0].powi(3))
///     }
///
///     fn backward(&self, ctx: &Context, grad_output: f64) -> Vec<Option<f64>> {
///         ctx.saved_values()
///             .iter()
///             .map(|x| Some(3.0 * x * x * grad_output))
///             .collect()
///     }
/// }
///
/// let x = Tensor::new(2.0, true);
/// let y = Cube.apply(&[x.clone().into()]).unwrap();
/// y.backward().unwrap();
/// assert_eq!(y.value(), 8.0);
/// assert_eq!(x.grad(), Some(12.0));
/// ```
pub trait Function: Debug + Send + Sync + 'static {
    /// Op tag of the outputs.
    fn name(&self) -> &'static str;

    /// Computes the output from the raw operand values.
    fn forward(&self, ctx: &mut Context, inputs: &[f64]) -> Result<f64, MiniGradError>;

    /// Returns one gradient contribution per positional operand of the forward call
    /// (a one-element vector for a single operand). `None` means no contribution.
    fn backward(&self, ctx: &Context, grad_output: f64) -> Vec<Option<f64>>;

    /// Runs the function on `operands` and records it in the graph.
    ///
    /// The output requires gradients if any tensor operand does, and its parents are
    /// exactly those operands. At backward time, contributions for raw scalars or
    /// non-requiring tensors are dropped.
    ///
    /// # Errors
    /// Whatever `forward` returns. A count mismatch in `backward` surfaces later, as an
    /// `InvalidOperation` from [`Tensor::backward`].
    fn apply(self, operands: &[Operand]) -> Result<Tensor, MiniGradError>
    where
        Self: Sized,
    {
        apply(self, operands)
    }
}

/// Checks that a custom function received exactly `expected` operands.
pub fn expect_arity(name: &str, inputs: &[f64], expected: usize) -> Result<(), MiniGradError> {
    if inputs.len() != expected {
        return Err(MiniGradError::InvalidOperation(format!(
            "{} expects {} input(s), got {}",
            name,
            expected,
            inputs.len()
        )));
    }
    Ok(())
}

/// Backward op installed by [`apply`]: owns the function, its `Context` and the operands.
#[derive(Debug)]
struct FunctionBackward<F: Function> {
    function: F,
    ctx: Context,
    inputs: Vec<Tensor>,
}

impl<F: Function> BackwardOp for FunctionBackward<F> {
    fn backward(&self, grad_output: f64) -> Result<Vec<Option<f64>>, MiniGradError> {
        let grads = self.function.backward(&self.ctx, grad_output);
        if grads.len() != self.inputs.len() {
            return Err(MiniGradError::InvalidOperation(format!(
                "{}.backward returned {} gradients for {} inputs",
                self.function.name(),
                grads.len(),
                self.inputs.len()
            )));
        }
        Ok(grads)
    }

    fn inputs(&self) -> Vec<Tensor> {
        self.inputs.clone()
    }
}

/// Applies `function` to `operands`. See [`Function::apply`].
pub fn apply<F: Function>(function: F, operands: &[Operand]) -> Result<Tensor, MiniGradError> {
    let raw_inputs: Vec<f64> = operands.iter().map(Operand::value).collect();
    let requires_grad = operands.iter().any(Operand::requires_grad);

    let mut ctx = Context::new();
    let output_value = function.forward(&mut ctx, &raw_inputs)?;
    debug!(
        "apply {}: {} operand(s), output {} (requires_grad: {})",
        function.name(),
        operands.len(),
        output_value,
        requires_grad
    );

    let inputs: Vec<Tensor> = operands.iter().map(Operand::to_tensor).collect();
    let input_refs: Vec<&Tensor> = inputs.iter().collect();
    let name = function.name();
    let grad_fn: Arc<dyn BackwardOp> = Arc::new(FunctionBackward {
        function,
        ctx,
        inputs: inputs.clone(),
    });
    Ok(Tensor::from_data(TensorData::from_op(
        output_value,
        requires_grad,
        &input_refs,
        grad_fn,
        name,
    )))
}

#[cfg(test)]
#[path = "function_test.rs"]
mod tests;
