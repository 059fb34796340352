use crate::error::MiniGradError;
use crate::tensor::Tensor;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MiniGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MiniGradError),
    #[error("Input {input_index} requires grad but has no gradient after backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Gradient check input must be a leaf node (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
}

impl From<MiniGradError> for GradCheckError {
    fn from(err: MiniGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite
/// differences.
///
/// `func` is evaluated once on `inputs` and differentiated with `backward()`; the
/// gradients of the grad-requiring inputs are then compared with
/// \( \frac{f(x + \epsilon) - f(x - \epsilon)}{2 \epsilon} \).
///
/// The gradients of `inputs` are reset before the analytical pass and hold the
/// analytical values afterwards.
///
/// # Errors
/// * `InputNotLeaf` if an input was produced by an operation.
/// * `RequiresGradPropagationError` if an input requires grad but the output does not.
/// * `GradientMismatch` if `|analytical - numerical| > tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, MiniGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    // --- 1. Analytical gradients ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    let any_input_requires_grad = inputs.iter().any(Tensor::requires_grad);
    if any_input_requires_grad && !output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    if output.requires_grad() {
        output
            .backward()
            .map_err(GradCheckError::BackwardPassError)?;
    }

    // --- 2. Numerical gradients, one input at a time ---
    for (i, original_input) in inputs.iter().enumerate() {
        if !original_input.requires_grad() {
            continue;
        }
        let analytical_grad = original_input
            .grad()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })?;

        let value = original_input.value();
        let loss_plus = evaluate_perturbed(&func, inputs, i, value + epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, i, value - epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {}: analytical {}, numerical {}, difference {}",
            i, analytical_grad, numerical_grad, difference
        );
        if difference > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Evaluates `func` with input `index` replaced by a fresh leaf holding `value`.
fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[Tensor],
    index: usize,
    value: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, MiniGradError>,
{
    let perturbed: Vec<Tensor> = inputs
        .iter()
        .enumerate()
        .map(|(j, t)| {
            if j == index {
                Tensor::new(value, t.requires_grad())
            } else {
                t.detach()
            }
        })
        .collect();
    Ok(func(&perturbed)?.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
