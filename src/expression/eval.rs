use crate::expression::ast::Expression;

impl Expression {
    /// Evaluates the expression with plain IEEE 754 double arithmetic.
    ///
    /// Division by zero is not an error: it yields an infinity or NaN.
    pub fn value(&self) -> f64 {
        self.fold(
            |n| n,
            |op, operand| op.apply(operand),
            |op, l, r| op.apply(l, r),
            |inner| inner,
        )
    }
}
