/// Binary arithmetic operators, tagged with their source symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Addition => '+',
            Operator::Subtraction => '-',
            Operator::Multiplication => '*',
            Operator::Division => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Addition),
            '-' => Some(Operator::Subtraction),
            '*' => Some(Operator::Multiplication),
            '/' => Some(Operator::Division),
            _ => None,
        }
    }

    /// The prefix form of this operator, if it has one (`+` and `-` only)
    pub fn as_prefix(self) -> Option<PrefixOperator> {
        match self {
            Operator::Addition => Some(PrefixOperator::Plus),
            Operator::Subtraction => Some(PrefixOperator::Minus),
            Operator::Multiplication | Operator::Division => None,
        }
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Addition => left + right,
            Operator::Subtraction => left - right,
            Operator::Multiplication => left * right,
            Operator::Division => left / right,
        }
    }
}

/// Operators that may appear in prefix position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Plus,
    Minus,
}

impl PrefixOperator {
    pub fn symbol(self) -> char {
        match self {
            PrefixOperator::Plus => '+',
            PrefixOperator::Minus => '-',
        }
    }

    pub fn apply(self, operand: f64) -> f64 {
        match self {
            PrefixOperator::Plus => operand,
            PrefixOperator::Minus => -operand,
        }
    }
}

/// Represents a parsed arithmetic expression
///
/// Children are boxed and owned by exactly one parent; nothing hands out
/// mutable access to them once the tree is built.
///
/// Binary chains such as `1 + 1 + ... + 1` nest one level per operator, so
/// evaluation, rendering, cloning, comparison and drop all walk the tree with
/// an explicit stack. Only the derived `Debug` recurses.
#[derive(Debug)]
pub enum Expression {
    Number(f64),
    Prefix(PrefixOperator, Box<Expression>),
    Binary(Operator, Box<Expression>, Box<Expression>),
    Grouping(Box<Expression>), // parentheses, kept for rendering only
}

impl Expression {
    pub fn prefix(operator: PrefixOperator, operand: Expression) -> Self {
        Expression::Prefix(operator, Box::new(operand))
    }

    pub fn binary(operator: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(operator, Box::new(left), Box::new(right))
    }

    pub fn grouping(inner: Expression) -> Self {
        Expression::Grouping(Box::new(inner))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Expression::Number(_))
    }
}
