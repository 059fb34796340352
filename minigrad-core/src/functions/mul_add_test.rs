use super::*;
use crate::autograd::grad_check::check_grad;

#[test]
fn test_mul_add_forward_and_backward() -> Result<(), MiniGradError> {
    let x = Tensor::new(2.0, true);
    let y = Tensor::new(-3.0, true);
    let z = Tensor::new(0.5, true);
    let out = mul_add(&x, &y, &z)?;
    assert_eq!(out.value(), -5.5);
    assert_eq!(out.op(), "MulAdd");
    out.backward()?;
    assert_eq!(x.grad(), Some(-3.0));
    assert_eq!(y.grad(), Some(2.0));
    assert_eq!(z.grad(), Some(1.0));
    Ok(())
}

#[test]
fn test_mul_add_same_operand() -> Result<(), MiniGradError> {
    // x * x + x -> 2x + 1
    let x = Tensor::new(3.0, true);
    let out = mul_add(&x, &x, &x)?;
    assert_eq!(out.value(), 12.0);
    assert_eq!(out.parents().len(), 1);
    out.backward()?;
    assert_eq!(x.grad(), Some(7.0));
    Ok(())
}

#[test]
fn test_mul_add_matches_numerical_gradient() {
    let inputs = [
        Tensor::new(1.25, true),
        Tensor::new(-0.75, true),
        Tensor::new(2.0, true),
    ];
    let result = check_grad(
        |t: &[Tensor]| mul_add(&t[0], &t[1], &t[2]),
        &inputs,
        1e-6,
        1e-6,
    );
    assert!(result.is_ok(), "{:?}", result);
}
