use std::fmt;

use crate::expression::ast::{Expression, Operator, PrefixOperator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

enum Piece<'a> {
    Node(&'a Expression),
    Infix(Operator),
    Symbol(char),
}

/// Canonical rendering; parsing the output yields the same tree shape.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // pieces are pushed in reverse of the order they are written
        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                // Debug keeps the fractional part: 5.0 rather than 5
                Piece::Node(Expression::Number(n)) => write!(f, "{:?}", n)?,
                Piece::Node(Expression::Prefix(op, operand)) => {
                    pieces.push(Piece::Node(operand.as_ref()));
                    pieces.push(Piece::Symbol(op.symbol()));
                }
                Piece::Node(Expression::Binary(op, l, r)) => {
                    pieces.push(Piece::Node(r.as_ref()));
                    pieces.push(Piece::Infix(*op));
                    pieces.push(Piece::Node(l.as_ref()));
                }
                Piece::Node(Expression::Grouping(inner)) => {
                    pieces.push(Piece::Symbol(')'));
                    pieces.push(Piece::Node(inner.as_ref()));
                    pieces.push(Piece::Symbol('('));
                }
                Piece::Infix(op) => write!(f, " {} ", op)?,
                Piece::Symbol(c) => write!(f, "{}", c)?,
            }
        }

        Ok(())
    }
}
