//! # Reference custom functions
//!
//! Differentiable operators built on the [`Function`](crate::Function) trait rather than
//! in the core. Each one has a unit struct implementing the trait and a convenience
//! function applying it.
//!
//! Their backward rules are kept exactly as they have always been computed, including
//! the ones that differ from the textbook derivative:
//!
//! - [`Axpy`] returns its gradients in `(x, a, y)` order while its operands are `(a, x, y)`.
//! - [`Clamp01`] lets the gradient through only at or outside the clamp boundaries.

pub mod axpy;
pub mod clamp01;
pub mod mul_add;
pub mod square;

pub use axpy::{axpy, Axpy};
pub use clamp01::{clamp01, Clamp01};
pub use mul_add::{mul_add, MulAdd};
pub use square::{square, Square};
