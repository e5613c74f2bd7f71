use std::fmt;

use crate::expression::Operator;
use crate::lexer::errors::{LexicalError, LexicalErrorKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Operator(Operator),
    Number(f64),
    Error(LexicalErrorKind),
    End,
}

/// Human readable description, used inside diagnostics
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "a left parenthesis"),
            TokenKind::RightParen => write!(f, "a right parenthesis"),
            TokenKind::Operator(op) => write!(f, "an operator '{}'", op),
            TokenKind::Number(n) => write!(f, "a number ({})", n),
            TokenKind::Error(LexicalErrorKind::InvalidCharacter(c)) => {
                write!(f, "an invalid character '{}'", c)
            }
            TokenKind::Error(LexicalErrorKind::NoDigitAfterDecimalPoint) => {
                write!(f, "a number with no digit after its decimal point")
            }
            TokenKind::Error(LexicalErrorKind::NoDigitAfterE) => {
                write!(f, "a number with no digit after its exponent marker")
            }
            TokenKind::End => write!(f, "the end of the string"),
        }
    }
}

/// A token and the zero-based character offset it was found at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::End)
    }

    /// The lexical error carried by an error token
    pub fn error(&self) -> Option<LexicalError> {
        match self.kind {
            TokenKind::Error(kind) => Some(LexicalError::new(kind, self.position)),
            _ => None,
        }
    }
}
