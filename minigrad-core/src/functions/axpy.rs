use crate::autograd::function::{expect_arity, Context, Function, Operand};
use crate::error::MiniGradError;
use crate::tensor::Tensor;

/// `a * x + y`.
///
/// Backward computes `grad_x = grad * a`, `grad_a = grad * x` and `grad_y = grad`, and
/// returns them as `(grad_x, grad_a, grad_y)`. Contributions are matched to operands by
/// position, so operand `a` receives `grad * a` and operand `x` receives `grad * x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Axpy;

impl Function for Axpy {
    fn name(&self) -> &'static str {
        "Axpy"
    }

    fn forward(&self, ctx: &mut Context, inputs: &[f64]) -> Result<f64, MiniGradError> {
        expect_arity(self.name(), inputs, 3)?;
        let (a, x, y) = (inputs[0], inputs[1], inputs[2]);
        ctx.save_for_backward(&[a, x]);
        Ok(a * x + y)
    }

    fn backward(&self, ctx: &Context, grad_output: f64) -> Vec<Option<f64>> {
        let [a, x] = ctx.saved_values() else {
            return Vec::new();
        };
        let grad_a = grad_output * x;
        let grad_x = grad_output * a;
        let grad_y = grad_output;
        vec![Some(grad_x), Some(grad_a), Some(grad_y)]
    }
}

/// Applies [`Axpy`] to `(a, x, y)`.
pub fn axpy(
    a: impl Into<Operand>,
    x: impl Into<Operand>,
    y: impl Into<Operand>,
) -> Result<Tensor, MiniGradError> {
    Axpy.apply(&[a.into(), x.into(), y.into()])
}

#[cfg(test)]
#[path = "axpy_test.rs"]
mod tests;
