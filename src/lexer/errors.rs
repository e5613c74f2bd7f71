use thiserror::Error;

use crate::lexer::token::TokenKind;

/// What went wrong while scanning a token
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorKind {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("no digit after decimal point")]
    NoDigitAfterDecimalPoint,
    #[error("no digit after exponent marker")]
    NoDigitAfterE,
}

/// A lexical error together with the character offset that triggered it
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Lexical error: found {} at position {position}", found(.kind))]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    pub position: usize,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

fn found(kind: &LexicalErrorKind) -> TokenKind {
    TokenKind::Error(*kind)
}
