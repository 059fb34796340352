use approx::assert_relative_eq;
use minigrad_core::Tensor;

// Helpers shared by the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn grad_leaf(value: f64) -> Tensor {
    Tensor::new(value, true)
}

#[allow(dead_code)]
pub fn assert_grad(tensor: &Tensor, expected: f64) {
    let grad = tensor.grad().expect("expected a gradient, found None");
    assert_relative_eq!(grad, expected, epsilon = 1e-9, max_relative = 1e-9);
}
