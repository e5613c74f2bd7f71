use crate::expression::{Expression, Operator, PrefixOperator};

fn num(n: f64) -> Expression {
    Expression::Number(n)
}

#[test]
fn test_number_evaluates_to_itself() {
    assert_eq!(num(2.5).value(), 2.5);
    assert_eq!(format!("{}", num(2.5)), "2.5");
}

#[test]
fn test_number_renders_with_fraction() {
    assert_eq!(format!("{}", num(5.0)), "5.0");
    assert_eq!(format!("{}", num(0.0)), "0.0");
    assert_eq!(format!("{}", num(-3.0)), "-3.0");
}

#[test]
fn test_binary_operators() {
    let cases = [
        (Operator::Addition, 8.0, "6.0 + 2.0"),
        (Operator::Subtraction, 4.0, "6.0 - 2.0"),
        (Operator::Multiplication, 12.0, "6.0 * 2.0"),
        (Operator::Division, 3.0, "6.0 / 2.0"),
    ];
    for (op, expected, rendered) in cases {
        let expr = Expression::binary(op, num(6.0), num(2.0));
        assert_eq!(expr.value(), expected);
        assert_eq!(format!("{}", expr), rendered);
    }
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    let positive = Expression::binary(Operator::Division, num(1.0), num(0.0));
    assert_eq!(positive.value(), f64::INFINITY);

    let negative = Expression::binary(Operator::Division, num(-1.0), num(0.0));
    assert_eq!(negative.value(), f64::NEG_INFINITY);

    let undefined = Expression::binary(Operator::Division, num(0.0), num(0.0));
    assert!(undefined.value().is_nan());
}

#[test]
fn test_prefix_operators() {
    let minus = Expression::prefix(PrefixOperator::Minus, num(5.0));
    assert_eq!(minus.value(), -5.0);
    assert_eq!(format!("{}", minus), "-5.0");

    let plus = Expression::prefix(PrefixOperator::Plus, minus);
    assert_eq!(plus.value(), -5.0);
    assert_eq!(format!("{}", plus), "+-5.0");
}

#[test]
fn test_grouping_keeps_value_and_adds_parens() {
    let sum = Expression::binary(Operator::Addition, num(2.0), num(3.0));
    let grouped = Expression::grouping(sum.clone());
    assert_eq!(grouped.value(), sum.value());
    assert_eq!(format!("{}", grouped), "(2.0 + 3.0)");

    let product = Expression::binary(Operator::Multiplication, num(6.0), grouped);
    assert_eq!(product.value(), 30.0);
    assert_eq!(format!("{}", product), "6.0 * (2.0 + 3.0)");
}

#[test]
fn test_tree_shape_decides_evaluation_order() {
    // (1 - 2) - 3 as built by a left-associative parser
    let left_assoc = Expression::binary(
        Operator::Subtraction,
        Expression::binary(Operator::Subtraction, num(1.0), num(2.0)),
        num(3.0),
    );
    assert_eq!(left_assoc.value(), -4.0);

    // 1 - (2 - 3) built by hand, rendered without the parens it lacks
    let right_assoc = Expression::binary(
        Operator::Subtraction,
        num(1.0),
        Expression::binary(Operator::Subtraction, num(2.0), num(3.0)),
    );
    assert_eq!(right_assoc.value(), 2.0);
    assert_eq!(format!("{}", right_assoc), "1.0 - 2.0 - 3.0");
}

#[test]
fn test_operator_symbols() {
    for symbol in ['+', '-', '*', '/'] {
        let op = Operator::from_symbol(symbol);
        assert!(op.is_some());
        if let Some(op) = op {
            assert_eq!(op.symbol(), symbol);
        }
    }
    assert_eq!(Operator::from_symbol('^'), None);
}

#[test]
fn test_only_additive_operators_have_prefix_forms() {
    assert_eq!(Operator::Addition.as_prefix(), Some(PrefixOperator::Plus));
    assert_eq!(Operator::Subtraction.as_prefix(), Some(PrefixOperator::Minus));
    assert_eq!(Operator::Multiplication.as_prefix(), None);
    assert_eq!(Operator::Division.as_prefix(), None);
}

#[test]
fn test_value_and_rendering_are_repeatable() {
    let expr = Expression::binary(
        Operator::Division,
        num(1.0),
        Expression::prefix(PrefixOperator::Minus, num(3.0)),
    );
    let first = (expr.value(), expr.to_string());
    let second = (expr.value(), expr.to_string());
    assert_eq!(first, second);
}

fn left_chain(terms: usize) -> Expression {
    (1..terms).fold(num(1.0), |acc, _| {
        Expression::binary(Operator::Addition, acc, num(1.0))
    })
}

#[test]
fn test_deep_left_chain_is_walked_without_recursion() {
    let expr = left_chain(300_000);
    assert_eq!(expr.value(), 300_000.0);

    let text = expr.to_string();
    assert!(text.starts_with("1.0 + 1.0 + "));
    assert_eq!(text.matches('+').count(), 299_999);

    let copy = expr.clone();
    assert_eq!(copy, expr);
    assert_ne!(copy, left_chain(299_999));
    // both trees are dropped here
}

#[test]
fn test_deep_prefix_and_grouping_nesting() {
    let expr = (0..200_000).fold(num(2.0), |acc, i| {
        if i % 2 == 0 {
            Expression::prefix(PrefixOperator::Minus, acc)
        } else {
            Expression::grouping(acc)
        }
    });
    assert_eq!(expr.value(), 2.0);
    assert!(expr.to_string().ends_with("2.0))"));
}

#[test]
fn test_fold_visits_in_source_order() {
    let expr = Expression::binary(
        Operator::Subtraction,
        Expression::grouping(Expression::prefix(PrefixOperator::Minus, num(1.0))),
        num(2.0),
    );
    let leaves = expr.fold(
        |n| vec![n],
        |_, operand| operand,
        |_, mut l, r| {
            l.extend(r);
            l
        },
        |inner| inner,
    );
    assert_eq!(leaves, vec![1.0, 2.0]);
}

#[test]
fn test_equality_compares_structure() {
    let grouped = Expression::grouping(num(1.0));
    assert_ne!(grouped, num(1.0));
    assert_ne!(
        Expression::binary(Operator::Addition, num(1.0), num(2.0)),
        Expression::binary(Operator::Subtraction, num(1.0), num(2.0))
    );
    assert_ne!(num(f64::NAN), num(f64::NAN));
}
