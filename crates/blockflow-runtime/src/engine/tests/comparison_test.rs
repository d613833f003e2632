//! Comparison operator tests

use crate::engine::operators::execute_compare;
use crate::error::EvaluationError;
use blockflow_core::{Operator, Value};

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn text(s: &str) -> Value {
    Value::String(s.to_string())
}

// ===========================================
// Numeric comparisons
// ===========================================

#[test]
fn test_numeric_operators() {
    let cases = [
        (Operator::Eq, 5.0, 5.0, true),
        (Operator::Eq, 5.0, 6.0, false),
        (Operator::Ne, 5.0, 6.0, true),
        (Operator::Ne, 5.0, 5.0, false),
        (Operator::Lt, 4.0, 5.0, true),
        (Operator::Lt, 5.0, 5.0, false),
        (Operator::Le, 5.0, 5.0, true),
        (Operator::Le, 6.0, 5.0, false),
        (Operator::Gt, 6.0, 5.0, true),
        (Operator::Gt, 5.0, 5.0, false),
        (Operator::Ge, 5.0, 5.0, true),
        (Operator::Ge, 4.0, 5.0, false),
    ];

    for (op, left, right, expected) in cases {
        assert_eq!(
            execute_compare("c", &num(left), op, &num(right)).unwrap(),
            expected,
            "{} {} {}",
            left,
            op,
            right
        );
    }
}

#[test]
fn test_no_epsilon_tolerance() {
    // 0.1 + 0.2 is not exactly 0.3 in IEEE-754
    let sum = 0.1 + 0.2;
    assert!(!execute_compare("c", &num(sum), Operator::Eq, &num(0.3)).unwrap());
    assert!(execute_compare("c", &num(sum), Operator::Gt, &num(0.3)).unwrap());
}

#[test]
fn test_negative_numbers() {
    assert!(execute_compare("c", &num(-5.0), Operator::Lt, &num(0.0)).unwrap());
    assert!(execute_compare("c", &num(-5.0), Operator::Eq, &num(-5.0)).unwrap());
}

// ===========================================
// Text comparisons
// ===========================================

#[test]
fn test_text_equality() {
    assert!(execute_compare("c", &text("gold"), Operator::Eq, &text("gold")).unwrap());
    assert!(!execute_compare("c", &text("gold"), Operator::Eq, &text("Gold")).unwrap());
    assert!(execute_compare("c", &text("gold"), Operator::Ne, &text("silver")).unwrap());
}

#[test]
fn test_cross_type_equality_is_always_unequal() {
    assert!(!execute_compare("c", &text("18"), Operator::Eq, &num(18.0)).unwrap());
    assert!(!execute_compare("c", &num(18.0), Operator::Eq, &text("18")).unwrap());
    assert!(execute_compare("c", &text("abc"), Operator::Ne, &num(1.0)).unwrap());
}

#[test]
fn test_relational_on_text_is_type_mismatch() {
    for op in [Operator::Lt, Operator::Le, Operator::Gt, Operator::Ge] {
        let err = execute_compare("c1", &text("hello"), op, &num(5.0)).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::TypeMismatch {
                block_id: "c1".to_string(),
                operator: op,
                left: text("hello"),
                right: num(5.0),
            }
        );
    }
}

#[test]
fn test_relational_with_text_threshold_is_type_mismatch() {
    let err = execute_compare("c1", &num(5.0), Operator::Gt, &text("a")).unwrap_err();
    assert!(matches!(err, EvaluationError::TypeMismatch { .. }));

    let err = execute_compare("c1", &text("b"), Operator::Gt, &text("a")).unwrap_err();
    assert!(matches!(err, EvaluationError::TypeMismatch { .. }));
}
