use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::expression::Expression;
use crate::parser::{ParseError, parse_expression};

/// An expression tree ready to be evaluated or rendered any number of times
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpression {
    root: Expression,
}

impl ParsedExpression {
    /// # Errors
    ///
    /// Returns an error if `text` is not exactly one well-formed expression.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse_expression(text).map(|root| Self { root })
    }

    /// Wraps a known value as a single number, without going through the lexer
    pub fn from_number(value: f64) -> Self {
        debug!("Wrapping number {:?} as expression", value);
        Self {
            root: Expression::Number(value),
        }
    }

    /// Evaluates the tree; recomputed on every call
    pub fn value(&self) -> f64 {
        self.root.value()
    }

    pub fn description(&self) -> String {
        self.root.to_string()
    }

    pub fn expression(&self) -> &Expression {
        &self.root
    }

    pub fn into_expression(self) -> Expression {
        self.root
    }

    /// True when the whole tree is a single number leaf
    pub fn is_number(&self) -> bool {
        self.root.is_number()
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl FromStr for ParsedExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ParsedExpression {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<f64> for ParsedExpression {
    fn from(value: f64) -> Self {
        Self::from_number(value)
    }
}
