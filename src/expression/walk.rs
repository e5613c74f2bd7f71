use std::mem;

use crate::expression::ast::{Expression, Operator, PrefixOperator};

enum Task<'a> {
    Visit(&'a Expression),
    Prefix(PrefixOperator),
    Binary(Operator),
    Grouping,
}

fn pop<T>(results: &mut Vec<T>) -> T {
    match results.pop() {
        Some(value) => value,
        None => unreachable!("expression fold ran out of operands"),
    }
}

impl Expression {
    /// Post-order fold over the tree without recursion
    pub fn fold<T>(
        &self,
        mut number: impl FnMut(f64) -> T,
        mut prefix: impl FnMut(PrefixOperator, T) -> T,
        mut binary: impl FnMut(Operator, T, T) -> T,
        mut grouping: impl FnMut(T) -> T,
    ) -> T {
        let mut tasks = vec![Task::Visit(self)];
        let mut results = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(Expression::Number(n)) => results.push(number(*n)),
                Task::Visit(Expression::Prefix(op, operand)) => {
                    tasks.push(Task::Prefix(*op));
                    tasks.push(Task::Visit(operand.as_ref()));
                }
                Task::Visit(Expression::Binary(op, l, r)) => {
                    tasks.push(Task::Binary(*op));
                    tasks.push(Task::Visit(r.as_ref()));
                    tasks.push(Task::Visit(l.as_ref()));
                }
                Task::Visit(Expression::Grouping(inner)) => {
                    tasks.push(Task::Grouping);
                    tasks.push(Task::Visit(inner.as_ref()));
                }
                Task::Prefix(op) => {
                    let operand = pop(&mut results);
                    results.push(prefix(op, operand));
                }
                Task::Binary(op) => {
                    let right = pop(&mut results);
                    let left = pop(&mut results);
                    results.push(binary(op, left, right));
                }
                Task::Grouping => {
                    let inner = pop(&mut results);
                    results.push(grouping(inner));
                }
            }
        }

        pop(&mut results)
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        self.fold(
            Expression::Number,
            Expression::prefix,
            Expression::binary,
            Expression::grouping,
        )
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Expression::Number(a), Expression::Number(b)) if a == b => {}
                (Expression::Prefix(op_a, a), Expression::Prefix(op_b, b)) if op_a == op_b => {
                    pending.push((a.as_ref(), b.as_ref()));
                }
                (Expression::Binary(op_a, la, ra), Expression::Binary(op_b, lb, rb))
                    if op_a == op_b =>
                {
                    pending.push((ra.as_ref(), rb.as_ref()));
                    pending.push((la.as_ref(), lb.as_ref()));
                }
                (Expression::Grouping(a), Expression::Grouping(b)) => {
                    pending.push((a.as_ref(), b.as_ref()));
                }
                _ => return false,
            }
        }

        true
    }
}

/// Moves non-leaf children onto `pending` so they are dropped one at a time
fn detach_children(node: &mut Expression, pending: &mut Vec<Box<Expression>>) {
    let mut detach = |child: &mut Box<Expression>| {
        if !child.is_number() {
            pending.push(mem::replace(child, Box::new(Expression::Number(0.0))));
        }
    };

    match node {
        Expression::Number(_) => {}
        Expression::Prefix(_, child) | Expression::Grouping(child) => detach(child),
        Expression::Binary(_, l, r) => {
            detach(l);
            detach(r);
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}
