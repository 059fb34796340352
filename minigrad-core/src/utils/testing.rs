use crate::tensor::Tensor;

/// Checks that a value is within `tolerance` of `expected`.
/// Panics with both values and the difference otherwise.
pub fn check_value_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if diff > tolerance || diff.is_nan() {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks that a tensor carries a gradient within `tolerance` of `expected`.
/// Panics if the gradient is `None`.
pub fn check_grad_near(tensor: &Tensor, expected: f64, tolerance: f64) {
    let grad = tensor
        .grad()
        .unwrap_or_else(|| panic!("Expected a gradient on {}, found None", tensor));
    check_value_near(grad, expected, tolerance);
}
