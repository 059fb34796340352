pub mod exp;
pub mod sin;

pub use exp::exp_op;
pub use sin::sin_op;
