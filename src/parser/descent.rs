use std::mem;

use crate::expression::{Expression, Operator};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::parser::constants::MAX_NESTING_DEPTH;
use crate::parser::errors::ParseError;

/// Lexical errors surface as parse errors as soon as they become the lookahead
fn checked(token: Token) -> Result<Token, ParseError> {
    match token.error() {
        Some(err) => Err(err.into()),
        None => Ok(token),
    }
}

/// Recursive descent parser with a single token of lookahead
///
/// ```text
/// expression           := addition-level EOF
/// addition-level       := multiplication-level ( ('+'|'-') multiplication-level )*
/// multiplication-level := prefix-level ( ('*'|'/') prefix-level )*
/// prefix-level         := ('+'|'-') prefix-level | primary
/// primary              := NUMBER | '(' addition-level ')'
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// # Errors
    ///
    /// Returns an error if the first token of the input is malformed.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = checked(lexer.next_token())?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Parses the whole input, which must hold exactly one expression.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntactic error encountered.
    pub fn parse(mut self) -> Result<Expression, ParseError> {
        let expression = self.addition()?;
        if self.current.is_end() {
            Ok(expression)
        } else {
            Err(ParseError::ExpectedExpressionEnd {
                token: self.current.kind,
                position: self.current.position,
            })
        }
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        debug_assert!(!self.current.is_end(), "parser advanced past end of input");
        let next = checked(self.lexer.next_token())?;
        Ok(mem::replace(&mut self.current, next))
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                token: self.current.kind,
                position: self.current.position,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn addition(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.multiplication()?;
        while let TokenKind::Operator(op @ (Operator::Addition | Operator::Subtraction)) =
            self.current.kind
        {
            self.advance()?;
            let right = self.multiplication()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn multiplication(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.prefix()?;
        while let TokenKind::Operator(op @ (Operator::Multiplication | Operator::Division)) =
            self.current.kind
        {
            self.advance()?;
            let right = self.prefix()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn prefix(&mut self) -> Result<Expression, ParseError> {
        if let TokenKind::Operator(op) = self.current.kind
            && let Some(prefix) = op.as_prefix()
        {
            self.enter()?;
            self.advance()?;
            let operand = self.prefix()?;
            self.leave();
            return Ok(Expression::prefix(prefix, operand));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expression, ParseError> {
        match self.current.kind {
            TokenKind::Number(n) => {
                self.advance()?;
                Ok(Expression::Number(n))
            }
            TokenKind::LeftParen => {
                self.enter()?;
                self.advance()?;
                let inner = self.addition()?;
                if !matches!(self.current.kind, TokenKind::RightParen) {
                    return Err(ParseError::ExpectedRightParen {
                        token: self.current.kind,
                        position: self.current.position,
                    });
                }
                self.advance()?;
                self.leave();
                Ok(Expression::grouping(inner))
            }
            token => Err(ParseError::ExpectedExpression {
                token,
                position: self.current.position,
            }),
        }
    }
}
