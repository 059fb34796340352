pub mod relu;

pub use relu::{relu_op, RELU_POSITIVE_SLOPE};
