//! Expression tree model: node variants, evaluation and canonical rendering

mod ast;
mod display;
mod eval;
mod walk;

pub use ast::{Expression, Operator, PrefixOperator};

#[cfg(test)]
mod tests;
