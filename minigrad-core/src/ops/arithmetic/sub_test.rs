use super::*;
use crate::error::MiniGradError;

#[test]
fn test_sub_forward() {
    let a = Tensor::new(5.0, true);
    let b = Tensor::new(3.0, true);
    let c = &a - &b;
    assert_eq!(c.value(), 2.0);
    // Subtraction is an addition of a negation
    assert_eq!(c.op(), "add");
    assert!(c.requires_grad());
}

#[test]
fn test_sub_backward() -> Result<(), MiniGradError> {
    let a = Tensor::new(5.0, true);
    let b = Tensor::new(3.0, true);
    let c = sub_op(&a, &b);
    c.backward()?;
    assert_eq!(a.grad(), Some(1.0));
    assert_eq!(b.grad(), Some(-1.0));
    Ok(())
}

#[test]
fn test_sub_scalar_operands() {
    let a = Tensor::new(5.0, true);
    let r = &a - 2.0;
    assert_eq!(r.value(), 3.0);
    assert!(!r.requires_grad());

    let l = 2.0 - &a;
    assert_eq!(l.value(), -3.0);
    assert!(!l.requires_grad());
    assert_eq!(rsub_op(10.0, &a).value(), 5.0);
}

#[test]
fn test_sub_self_is_zero_with_cancelling_gradients() -> Result<(), MiniGradError> {
    let a = Tensor::new(4.0, true);
    let c = &a - &a;
    assert_eq!(c.value(), 0.0);
    c.backward()?;
    assert_eq!(a.grad(), Some(0.0));
    Ok(())
}
