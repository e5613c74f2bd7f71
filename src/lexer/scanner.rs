use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

use log::trace;

use crate::expression::Operator;
use crate::lexer::errors::LexicalErrorKind;
use crate::lexer::token::{Token, TokenKind};

/// Scanner states for numeric literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Integer,
    BeginDecimal,
    Decimal,
    BeginExponent,
    BeginSignedExponent,
    DecimalWithExponent,
}

impl NumberState {
    fn step(self, c: char) -> Option<NumberState> {
        use NumberState::*;

        match (self, c) {
            (Integer | Decimal | DecimalWithExponent, d) if d.is_ascii_digit() => Some(self),
            (BeginDecimal, d) if d.is_ascii_digit() => Some(Decimal),
            (BeginExponent | BeginSignedExponent, d) if d.is_ascii_digit() => {
                Some(DecimalWithExponent)
            }
            (Integer, '.') => Some(BeginDecimal),
            (Integer | Decimal, 'e' | 'E') => Some(BeginExponent),
            (BeginExponent, '+' | '-') => Some(BeginSignedExponent),
            _ => None,
        }
    }
}

/// Produces tokens one at a time from an input string
///
/// Positions are counted in characters, not bytes. Once the input is
/// exhausted every further call to [`Lexer::next_token`] returns an end
/// token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    position: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
            finished: false,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.bump();
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_blanks();
        let start = self.position;

        let token = match self.peek() {
            None => Token::new(TokenKind::End, start),
            Some(c) if c.is_ascii_digit() => self.number(start),
            Some(c) => {
                self.bump();
                let kind = match c {
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    _ => Operator::from_symbol(c).map_or(
                        TokenKind::Error(LexicalErrorKind::InvalidCharacter(c)),
                        TokenKind::Operator,
                    ),
                };
                Token::new(kind, start)
            }
        };

        trace!("Token at {}: {:?}", token.position, token.kind);
        token
    }

    fn number(&mut self, start: usize) -> Token {
        let mut lexeme = String::new();
        let mut state = NumberState::Integer;

        while let Some(next) = self.peek().and_then(|c| state.step(c)) {
            if let Some(c) = self.bump() {
                lexeme.push(c);
            }
            state = next;
        }

        match state {
            NumberState::BeginDecimal => Token::new(
                TokenKind::Error(LexicalErrorKind::NoDigitAfterDecimalPoint),
                self.position,
            ),
            NumberState::BeginExponent | NumberState::BeginSignedExponent => Token::new(
                TokenKind::Error(LexicalErrorKind::NoDigitAfterE),
                self.position,
            ),
            NumberState::Integer | NumberState::Decimal | NumberState::DecimalWithExponent => {
                match lexeme.parse::<f64>() {
                    Ok(value) => Token::new(TokenKind::Number(value), start),
                    Err(_) => unreachable!("scanner accepted a malformed number '{}'", lexeme),
                }
            }
        }
    }
}

/// Yields every token up to and including the first end token
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_end();
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
