//! Lexer: turns input text into positioned tokens on demand

mod errors;
mod scanner;
mod token;

pub use errors::{LexicalError, LexicalErrorKind};
pub use scanner::Lexer;
pub use token::{Token, TokenKind};
