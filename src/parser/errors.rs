use thiserror::Error;

use crate::lexer::{LexicalError, TokenKind};

/// Errors that can occur while parsing an expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error("Expected an expression but found {token} at position {position}")]
    ExpectedExpression { token: TokenKind, position: usize },
    #[error("Expected a right parenthesis but found {token} at position {position}")]
    ExpectedRightParen { token: TokenKind, position: usize },
    #[error("Expected the end of the expression but found {token} at position {position}")]
    ExpectedExpressionEnd { token: TokenKind, position: usize },
    #[error("Expression nested too deeply: found {token} at position {position}")]
    NestingTooDeep { token: TokenKind, position: usize },
}

impl ParseError {
    /// The token that triggered the error
    pub fn token(&self) -> TokenKind {
        match self {
            ParseError::Lexical(err) => TokenKind::Error(err.kind),
            ParseError::ExpectedExpression { token, .. }
            | ParseError::ExpectedRightParen { token, .. }
            | ParseError::ExpectedExpressionEnd { token, .. }
            | ParseError::NestingTooDeep { token, .. } => *token,
        }
    }

    /// Zero-based character offset of the offending token
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lexical(err) => err.position,
            ParseError::ExpectedExpression { position, .. }
            | ParseError::ExpectedRightParen { position, .. }
            | ParseError::ExpectedExpressionEnd { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }
}
