//! Parser: builds expression trees from the lexer's token stream

pub mod constants;
mod descent;
mod errors;

pub use descent::Parser;
pub use errors::ParseError;

use log::debug;

use crate::expression::Expression;

/// Parses `input` into an expression tree
///
/// # Errors
///
/// Returns an error if the input is not exactly one well-formed expression.
pub fn parse_expression(input: &str) -> Result<Expression, ParseError> {
    debug!("Parsing expression: '{}'", input);

    let result = Parser::new(input).and_then(Parser::parse);

    match &result {
        Ok(expression) => debug!("Parsed expression: {}", expression),
        Err(e) => debug!("Parsing failed: {}", e),
    }

    result
}
