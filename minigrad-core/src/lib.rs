//! # minigrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Arithmetic on [`Tensor`] values records a dynamic computation graph. Calling
//! [`Tensor::backward`] on a result walks that graph in reverse topological order and
//! accumulates gradients into every ancestor that requires them.
//!
//! New differentiable operators are added through the [`Function`] trait, which pairs a
//! `forward` rule with a `backward` rule and hands both the same per-call [`Context`].
//! The reference operators live in [`functions`].
//!
//! ```
//! use minigrad_core::Tensor;
//!
//! let x = Tensor::new(2.0, true);
//! let y = Tensor::new(3.0, true);
//! let z = &x * &y;
//! z.backward().unwrap();
//! assert_eq!(x.grad(), Some(3.0));
//! assert_eq!(y.grad(), Some(2.0));
//! ```

pub mod autograd;
pub mod error;
pub mod functions;
pub mod ops;
pub mod tensor;
pub mod tensor_data;

pub mod utils;

pub use autograd::function::{Context, Function, Operand};
pub use error::MiniGradError;
pub use tensor::Tensor;
