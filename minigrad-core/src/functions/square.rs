use crate::autograd::function::{expect_arity, Context, Function, Operand};
use crate::error::MiniGradError;
use crate::tensor::Tensor;

/// `x * x`, backward `2 * x * grad`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl Function for Square {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn forward(&self, ctx: &mut Context, inputs: &[f64]) -> Result<f64, MiniGradError> {
        expect_arity(self.name(), inputs, 1)?;
        let x = inputs[0];
        ctx.save_for_backward(&[x]);
        Ok(x * x)
    }

    fn backward(&self, ctx: &Context, grad_output: f64) -> Vec<Option<f64>> {
        match ctx.saved_values() {
            [x] => vec![Some(2.0 * x * grad_output)],
            _ => Vec::new(),
        }
    }
}

/// Applies [`Square`].
pub fn square(x: impl Into<Operand>) -> Result<Tensor, MiniGradError> {
    Square.apply(&[x.into()])
}

#[cfg(test)]
#[path = "square_test.rs"]
mod tests;
