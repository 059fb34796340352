use super::*;

#[test]
fn test_relu_forward() {
    let values = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (x, e) in values.iter().zip(expected.iter()) {
        let t = Tensor::new(*x, false);
        assert_eq!(t.relu().value(), *e);
    }
}

#[test]
fn test_relu_propagate_requires_grad() {
    let t1 = Tensor::new(-1.0, true);
    let result = t1.relu();
    assert!(result.requires_grad());
    assert_eq!(result.op(), "relu");

    let t2 = Tensor::new(3.0, false);
    assert!(!t2.relu().requires_grad());
}

#[test]
fn test_relu_backward_positive_uses_half_slope() -> Result<(), MiniGradError> {
    let x = Tensor::new(2.0, true);
    let y = x.relu();
    y.backward()?;
    // Not 1.0: the positive branch uses RELU_POSITIVE_SLOPE
    assert_eq!(x.grad(), Some(0.5));
    assert_eq!(x.grad(), Some(RELU_POSITIVE_SLOPE));
    Ok(())
}

#[test]
fn test_relu_backward_non_positive_blocks_gradient() -> Result<(), MiniGradError> {
    for v in [-3.0, 0.0] {
        let x = Tensor::new(v, true);
        x.relu().backward()?;
        assert_eq!(x.grad(), Some(0.0));
    }
    Ok(())
}

#[test]
fn test_relu_backward_chain() -> Result<(), MiniGradError> {
    // relu(x * 2) at x = 1.5: upstream into relu is 1, slope 0.5, then * 2
    let x = Tensor::new(1.5, true);
    let y = (&x * 2.0).relu();
    y.backward()?;
    assert_eq!(y.value(), 3.0);
    assert_eq!(x.grad(), Some(1.0));
    Ok(())
}
