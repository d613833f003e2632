//! Unit tests for PolicyEngine

use super::*;
use crate::config::EngineConfig;
use crate::error::SdkError;
use blockflow_core::{CoercionMode, DecisionBlock, Operator, Policy, Variables};
use blockflow_runtime::{EvaluationError, ValidationError};

fn age_gate(variables: Variables) -> Policy {
    Policy::new(
        "age_gate",
        vec![
            DecisionBlock::start("start", "c1"),
            DecisionBlock::conditional("c1", "age", Operator::Ge, 18, "e1", "e2"),
            DecisionBlock::end("e1", 1.0),
            DecisionBlock::end("e2", 0.0),
        ],
        variables,
    )
}

fn half_built() -> Policy {
    Policy::new(
        "half_built",
        vec![
            DecisionBlock::start("start", "c1"),
            DecisionBlock::conditional("c1", "age", Operator::Ge, 18, "e1", "todo"),
            DecisionBlock::end("e1", 1.0),
        ],
        Variables::from([("age", "30")]),
    )
}

#[test]
fn test_evaluate_uses_policy_bindings() {
    let engine = PolicyEngine::default();
    assert_eq!(engine.evaluate(&age_gate(Variables::from([("age", "21")]))).unwrap(), 1.0);
    assert_eq!(engine.evaluate(&age_gate(Variables::from([("age", "12")]))).unwrap(), 0.0);
}

#[test]
fn test_evaluate_wraps_evaluation_errors() {
    let err = PolicyEngine::default().evaluate(&age_gate(Variables::new())).unwrap_err();
    assert!(matches!(
        err,
        SdkError::EvaluationError(EvaluationError::VariableNotFound(ref name)) if name == "age"
    ));
}

#[test]
fn test_lazy_validation_by_default() {
    let engine = PolicyEngine::default();
    assert_eq!(engine.evaluate(&half_built()).unwrap(), 1.0);
}

#[test]
fn test_eager_validation_when_configured() {
    let engine = PolicyEngine::new(EngineConfig::new().validate_before_evaluate(true));
    match engine.evaluate(&half_built()) {
        Err(SdkError::ValidationFailed(errors)) => assert_eq!(
            errors,
            vec![ValidationError::DanglingReference {
                from: "c1".to_string(),
                target: "todo".to_string()
            }]
        ),
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_coercion_mode_reaches_evaluator() {
    let policy = Policy::new(
        "balance",
        vec![
            DecisionBlock::start("start", "c1"),
            DecisionBlock::conditional("c1", "balance", Operator::Lt, 0, "e1", "e2"),
            DecisionBlock::end("e1", 1.0),
            DecisionBlock::end("e2", 0.0),
        ],
        Variables::from([("balance", "-5")]),
    );

    assert_eq!(PolicyEngine::default().evaluate(&policy).unwrap(), 1.0);

    let legacy = PolicyEngine::new(EngineConfig::new().with_coercion_mode(CoercionMode::Legacy));
    assert!(matches!(
        legacy.evaluate(&policy),
        Err(SdkError::EvaluationError(EvaluationError::TypeMismatch { .. }))
    ));
}

#[test]
fn test_decide_without_trace() {
    let policy = age_gate(Variables::new());
    let response = PolicyEngine::default()
        .decide(&policy, DecisionRequest::new([("age", "40")]))
        .unwrap();

    assert_eq!(response.policy_id, policy.id());
    assert_eq!(response.policy_name, "age_gate");
    assert_eq!(response.decision, 1.0);
    assert_eq!(response.end_block, "e1");
    assert!(response.trace.is_none());
}

#[test]
fn test_decide_with_requested_trace() {
    let policy = age_gate(Variables::new());
    let request = DecisionRequest::default().with_variable("age", "17").with_trace();
    let response = PolicyEngine::default().decide(&policy, request).unwrap();

    let trace = response.trace.expect("trace requested");
    assert_eq!(trace.path(), vec!["start", "c1", "e2"]);
    assert_eq!(response.decision, 0.0);
}

#[test]
fn test_decide_with_configured_trace() {
    let engine = PolicyEngine::new(EngineConfig::new().enable_trace(true));
    let response = engine
        .decide(&age_gate(Variables::new()), DecisionRequest::new([("age", "18")]))
        .unwrap();
    assert!(response.trace.is_some());
}

#[test]
fn test_request_variables_override_policy_bindings() {
    let policy = age_gate(Variables::from([("age", "12")]));
    let engine = PolicyEngine::default();

    let response = engine
        .decide(&policy, DecisionRequest::new([("age", "30")]))
        .unwrap();
    assert_eq!(response.decision, 1.0);

    // Policy bindings still apply when the request leaves a name out
    let response = engine.decide(&policy, DecisionRequest::default()).unwrap();
    assert_eq!(response.decision, 0.0);
}

#[test]
fn test_validate() {
    let engine = PolicyEngine::default();
    assert!(engine.validate(&age_gate(Variables::new())).is_ok());
    assert!(matches!(
        engine.validate(&half_built()),
        Err(SdkError::ValidationFailed(_))
    ));
}
