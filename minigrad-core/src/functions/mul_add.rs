use crate::autograd::function::{expect_arity, Context, Function, Operand};
use crate::error::MiniGradError;
use crate::tensor::Tensor;

/// Fused `x * y + z`; backward `(grad * y, grad * x, grad)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MulAdd;

impl Function for MulAdd {
    fn name(&self) -> &'static str {
        "MulAdd"
    }

    fn forward(&self, ctx: &mut Context, inputs: &[f64]) -> Result<f64, MiniGradError> {
        expect_arity(self.name(), inputs, 3)?;
        let (x, y, z) = (inputs[0], inputs[1], inputs[2]);
        ctx.save_for_backward(&[x, y]);
        Ok(x * y + z)
    }

    fn backward(&self, ctx: &Context, grad_output: f64) -> Vec<Option<f64>> {
        let [x, y] = ctx.saved_values() else {
            return Vec::new();
        };
        vec![
            Some(grad_output * y),
            Some(grad_output * x),
            Some(grad_output),
        ]
    }
}

/// Applies [`MulAdd`] to `(x, y, z)`.
pub fn mul_add(
    x: impl Into<Operand>,
    y: impl Into<Operand>,
    z: impl Into<Operand>,
) -> Result<Tensor, MiniGradError> {
    MulAdd.apply(&[x.into(), y.into(), z.into()])
}

#[cfg(test)]
#[path = "mul_add_test.rs"]
mod tests;
