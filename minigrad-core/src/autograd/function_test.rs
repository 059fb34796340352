use super::*;

/// Scales its single input by a constant and reports it through the context.
#[derive(Debug)]
struct Scale(f64);

impl Function for Scale {
    fn name(&self) -> &'static str {
        "Scale"
    }

    fn forward(&self, ctx: &mut Context, inputs: &[f64]) -> Result<f64, MiniGradError> {
        expect_arity(self.name(), inputs, 1)?;
        ctx.save_for_backward(&[self.0]);
        Ok(inputs[0] * self.0)
    }

    fn backward(&self, ctx: &Context, grad_output: f64) -> Vec<Option<f64>> {
        vec![Some(grad_output * ctx.saved_values()[0])]
    }
}

/// Returns one gradient too few.
#[derive(Debug)]
struct Broken;

impl Function for Broken {
    fn name(&self) -> &'static str {
        "Broken"
    }

    fn forward(&self, _ctx: &mut Context, inputs: &[f64]) -> Result<f64, MiniGradError> {
        Ok(inputs.iter().sum())
    }

    fn backward(&self, _ctx: &Context, grad_output: f64) -> Vec<Option<f64>> {
        vec![Some(grad_output)]
    }
}

/// Sums its inputs but only differentiates the first one.
#[derive(Debug)]
struct FirstOnly;

impl Function for FirstOnly {
    fn name(&self) -> &'static str {
        "FirstOnly"
    }

    fn forward(&self, _ctx: &mut Context, inputs: &[f64]) -> Result<f64, MiniGradError> {
        Ok(inputs.iter().sum())
    }

    fn backward(&self, _ctx: &Context, grad_output: f64) -> Vec<Option<f64>> {
        vec![Some(grad_output), None]
    }
}

#[test]
fn test_context_save_overwrites() {
    let mut ctx = Context::new();
    assert!(ctx.saved_values().is_empty());
    ctx.save_for_backward(&[1.0, 2.0]);
    assert_eq!(ctx.saved_values(), &[1.0, 2.0]);
    ctx.save_for_backward(&[3.0]);
    assert_eq!(ctx.saved_values(), &[3.0]);
}

#[test]
fn test_operand_conversions() {
    let t = Tensor::new(2.0, true);
    let from_ref: Operand = (&t).into();
    let from_scalar: Operand = Operand::from(4.0);
    assert_eq!(from_ref.value(), 2.0);
    assert!(from_ref.requires_grad());
    assert!(from_ref.as_tensor().unwrap().same_node(&t));
    assert_eq!(from_scalar.value(), 4.0);
    assert!(!from_scalar.requires_grad());
    assert!(!from_scalar.to_tensor().requires_grad());
}

#[test]
fn test_apply_builds_node() -> Result<(), MiniGradError> {
    let x = Tensor::new(3.0, true);
    let y = Scale(2.5).apply(&[x.clone().into()])?;
    assert_eq!(y.value(), 7.5);
    assert_eq!(y.op(), "Scale");
    assert!(y.requires_grad());
    assert_eq!(y.parents().len(), 1);
    assert!(y.parents()[0].same_node(&x));

    y.backward()?;
    assert_eq!(x.grad(), Some(2.5));
    Ok(())
}

#[test]
fn test_apply_without_requiring_operands() -> Result<(), MiniGradError> {
    let x = Tensor::new(3.0, false);
    let y = Scale(2.0).apply(&[x.into()])?;
    assert!(!y.requires_grad());
    assert!(y.parents().is_empty());
    assert!(y.backward().unwrap_err().is_invalid_operation());
    Ok(())
}

#[test]
fn test_apply_forward_error_propagates() {
    let err = Scale(2.0)
        .apply(&[Operand::from(1.0), Operand::from(2.0)])
        .unwrap_err();
    assert_eq!(
        err,
        MiniGradError::InvalidOperation("Scale expects 1 input(s), got 2".to_string())
    );
}

#[test]
fn test_apply_gradient_count_mismatch() -> Result<(), MiniGradError> {
    let a = Tensor::new(1.0, true);
    let b = Tensor::new(2.0, true);
    let y = Broken.apply(&[a.clone().into(), b.clone().into()])?;
    assert_eq!(y.value(), 3.0);
    match y.backward() {
        Err(MiniGradError::InvalidOperation(msg)) => {
            assert!(msg.contains("Broken.backward returned 1 gradients for 2 inputs"));
        }
        other => panic!("Expected InvalidOperation, got {:?}", other),
    }
    // Nothing was accumulated into the operands
    assert_eq!(a.grad(), Some(0.0));
    assert_eq!(b.grad(), Some(0.0));
    Ok(())
}

#[test]
fn test_apply_drops_none_and_scalar_contributions() -> Result<(), MiniGradError> {
    let a = Tensor::new(1.0, true);
    let b = Tensor::new(2.0, true);
    let y = FirstOnly.apply(&[a.clone().into(), b.clone().into()])?;
    y.backward()?;
    assert_eq!(a.grad(), Some(1.0));
    assert_eq!(b.grad(), Some(0.0));

    // Raw scalar in the first slot: its contribution goes nowhere
    let c = Tensor::new(5.0, true);
    let z = FirstOnly.apply(&[Operand::from(10.0), c.clone().into()])?;
    assert_eq!(z.value(), 15.0);
    assert_eq!(z.parents().len(), 1);
    z.backward()?;
    assert_eq!(c.grad(), Some(0.0));
    Ok(())
}

#[test]
fn test_apply_requires_grad_if_any_operand_does() -> Result<(), MiniGradError> {
    let a = Tensor::new(1.0, false);
    let b = Tensor::new(2.0, true);
    let y = FirstOnly.apply(&[a.into(), b.clone().into()])?;
    assert!(y.requires_grad());
    assert_eq!(y.parents().len(), 1);
    assert!(y.parents()[0].same_node(&b));
    Ok(())
}

#[test]
fn test_each_apply_gets_its_own_context() -> Result<(), MiniGradError> {
    let x = Tensor::new(1.0, true);
    let y1 = Scale(2.0).apply(&[(&x).into()])?;
    let y2 = Scale(3.0).apply(&[(&x).into()])?;
    let z = &y1 + &y2;
    z.backward()?;
    assert_eq!(x.grad(), Some(5.0));
    Ok(())
}
