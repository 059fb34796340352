use super::*;
use crate::utils::testing::check_grad_near;

#[test]
fn test_add_forward() {
    let a = Tensor::new(1.5, true);
    let b = Tensor::new(2.0, false);
    let c = add_op(&a, &b);
    assert_eq!(c.value(), 3.5);
    assert_eq!(c.op(), "add");
    assert!(!c.is_leaf());
}

#[test]
fn test_add_requires_both_operands() {
    let a = Tensor::new(1.0, true);
    let b = Tensor::new(2.0, true);
    let k = Tensor::scalar(3.0);

    assert!(add_op(&a, &b).requires_grad());
    assert!(!add_op(&a, &k).requires_grad());
    assert!(!add_op(&k, &a).requires_grad());
    // Non-requiring outputs carry no gradient at all
    assert_eq!(add_op(&a, &k).grad(), None);
}

#[test]
fn test_add_parents_only_requiring_operands() {
    let a = Tensor::new(1.0, true);
    let k = Tensor::scalar(3.0);
    let c = add_op(&a, &k);
    let parents = c.parents();
    assert_eq!(parents.len(), 1);
    assert!(parents[0].same_node(&a));
}

#[test]
fn test_add_backward_simple() -> Result<(), MiniGradError> {
    let a = Tensor::new(1.0, true);
    let b = Tensor::new(-4.0, true);
    let c = &a + &b;
    c.backward()?;
    check_grad_near(&a, 1.0, 1e-12);
    check_grad_near(&b, 1.0, 1e-12);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), MiniGradError> {
    let a = Tensor::new(5.0, true);
    let c = &a + &a;
    assert_eq!(c.value(), 10.0);
    assert_eq!(c.parents().len(), 1);
    c.backward()?;
    check_grad_near(&a, 2.0, 1e-12);
    Ok(())
}

#[test]
fn test_add_scalar_operands() {
    let a = Tensor::new(2.0, true);
    assert_eq!((&a + 3.0).value(), 5.0);
    assert_eq!((3.0 + &a).value(), 5.0);
    assert!(!(3.0 + &a).requires_grad());
}

#[test]
fn test_add_backward_on_non_requiring_sum_fails() {
    let a = Tensor::new(2.0, true);
    let c = &a + 1.0;
    let err = c.backward().unwrap_err();
    assert!(err.is_invalid_operation());
    assert_eq!(a.grad(), Some(0.0));
}
