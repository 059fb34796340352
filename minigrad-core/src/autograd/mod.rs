//! # Autograd
//!
//! - [`backward_op`]: the [`BackwardOp`] trait, the local gradient rule stored in every
//!   node produced by an operation.
//! - [`graph`]: topological ordering of a graph and the backward-pass driver.
//! - [`function`]: the [`Function`](function::Function) extension mechanism for
//!   user-defined differentiable operators.
//! - [`grad_check`]: numerical verification of analytical gradients.

pub mod backward_op;
pub mod function;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
