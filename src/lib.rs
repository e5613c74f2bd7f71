//! numexpr - A library for parsing, evaluating and rendering arithmetic expressions
//!
//! Text is scanned by a lexer, turned into an expression tree by a recursive
//! descent parser, and the tree can then be evaluated or rendered back to a
//! canonical textual form.
//!
//! Parsing recurses once per level of parentheses or prefix operators; that
//! depth is capped at [`parser::constants::MAX_NESTING_DEPTH`]. Binary chains
//! are parsed in a loop and may be arbitrarily long. Trees are evaluated,
//! rendered, cloned, compared and dropped with an explicit stack, so their
//! depth is bounded by memory rather than by the call stack.

pub mod expression;
pub mod lexer;
pub mod parsed;
pub mod parser;

// Re-export the main public API
pub use expression::{Expression, Operator, PrefixOperator};
pub use lexer::{LexicalError, LexicalErrorKind, Token, TokenKind};
pub use parsed::ParsedExpression;
pub use parser::ParseError;

/// Parse an arithmetic expression
///
/// Supports `+ - * /` with the usual precedence, prefix `+` and `-`,
/// parentheses and decimal numbers with optional exponent. Blanks (spaces and
/// tabs) between tokens are ignored.
///
/// # Arguments
///
/// * `text` - The expression source
///
/// # Returns
///
/// * `Ok(ParsedExpression)` - The parsed tree
/// * `Err(ParseError)` - The first lexical or syntax error, with its position
///
/// # Errors
///
/// This function will return an error if:
/// * The text contains a character that is not part of the grammar
/// * A number ends right after its decimal point or exponent marker
/// * An operand, a closing parenthesis or the end of input is missing
///
/// # Examples
///
/// ```
/// use numexpr::parse;
///
/// match parse("5 + 6 * (2 + 3)") {
///     Ok(expr) => {
///         assert_eq!(expr.value(), 35.0);
///         assert_eq!(expr.description(), "5.0 + 6.0 * (2.0 + 3.0)");
///     }
///     Err(e) => panic!("unexpected error: {}", e),
/// }
///
/// match parse("3.") {
///     Ok(_) => panic!("expected an error"),
///     Err(e) => assert_eq!(e.position(), 2),
/// }
/// ```
pub fn parse(text: &str) -> Result<ParsedExpression, ParseError> {
    ParsedExpression::parse(text)
}

/// Wrap a number as an expression without parsing
///
/// # Examples
///
/// ```
/// use numexpr::from_number;
///
/// let expr = from_number(5.0);
/// assert_eq!(expr.description(), "5.0");
/// assert_eq!(serde_json::to_string(&expr).ok().as_deref(), Some("5.0"));
/// ```
pub fn from_number(value: f64) -> ParsedExpression {
    ParsedExpression::from_number(value)
}
