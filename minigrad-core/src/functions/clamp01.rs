use crate::autograd::function::{expect_arity, Context, Function, Operand};
use crate::error::MiniGradError;
use crate::tensor::Tensor;

/// Clamps into `[0, 1]`.
///
/// Backward passes the upstream gradient through when the input is **not** strictly
/// inside `(0, 1)` and blocks it (`0`) when it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clamp01;

impl Function for Clamp01 {
    fn name(&self) -> &'static str {
        "Clamp01"
    }

    fn forward(&self, ctx: &mut Context, inputs: &[f64]) -> Result<f64, MiniGradError> {
        expect_arity(self.name(), inputs, 1)?;
        let x = inputs[0];
        ctx.save_for_backward(&[x]);
        if x < 0.0 {
            return Ok(0.0);
        }
        if x > 1.0 {
            return Ok(1.0);
        }
        Ok(x)
    }

    fn backward(&self, ctx: &Context, grad_output: f64) -> Vec<Option<f64>> {
        let [x] = ctx.saved_values() else {
            return Vec::new();
        };
        if 0.0 < *x && *x < 1.0 {
            return vec![Some(0.0)];
        }
        vec![Some(grad_output)]
    }
}

/// Applies [`Clamp01`].
pub fn clamp01(x: impl Into<Operand>) -> Result<Tensor, MiniGradError> {
    Clamp01.apply(&[x.into()])
}

#[cfg(test)]
#[path = "clamp01_test.rs"]
mod tests;
