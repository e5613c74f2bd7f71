//! The public expression wrapper and its serde representation

mod codec;
mod wrapper;

pub use wrapper::ParsedExpression;
