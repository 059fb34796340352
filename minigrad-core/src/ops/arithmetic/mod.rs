// Export foundational arithmetic operations directly
pub mod add;
pub mod mul;
pub mod neg;
pub mod sub;

pub use add::{add_op, radd_op};
pub use mul::{mul_op, rmul_op};
pub use neg::neg_op;
pub use sub::{rsub_op, sub_op};

use crate::tensor::Tensor;
use std::ops::{Add, Mul, Sub};

/// Implements a binary operator trait for every combination of owned/borrowed
/// `Tensor` operands and for an `f64` on either side.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:path, $scalar_lhs_fn:path) => {
        impl $trait<&Tensor> for &Tensor {
            type Output = Tensor;
            fn $method(self, rhs: &Tensor) -> Tensor {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Tensor> for &Tensor {
            type Output = Tensor;
            fn $method(self, rhs: Tensor) -> Tensor {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Tensor> for Tensor {
            type Output = Tensor;
            fn $method(self, rhs: &Tensor) -> Tensor {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Tensor> for Tensor {
            type Output = Tensor;
            fn $method(self, rhs: Tensor) -> Tensor {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<f64> for &Tensor {
            type Output = Tensor;
            fn $method(self, rhs: f64) -> Tensor {
                $op_fn(self, &Tensor::scalar(rhs))
            }
        }

        impl $trait<f64> for Tensor {
            type Output = Tensor;
            fn $method(self, rhs: f64) -> Tensor {
                $op_fn(&self, &Tensor::scalar(rhs))
            }
        }

        impl $trait<&Tensor> for f64 {
            type Output = Tensor;
            fn $method(self, rhs: &Tensor) -> Tensor {
                $scalar_lhs_fn(self, rhs)
            }
        }

        impl $trait<Tensor> for f64 {
            type Output = Tensor;
            fn $method(self, rhs: Tensor) -> Tensor {
                $scalar_lhs_fn(self, &rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op, radd_op);
impl_binary_operator!(Sub, sub, sub_op, rsub_op);
impl_binary_operator!(Mul, mul, mul_op, rmul_op);
