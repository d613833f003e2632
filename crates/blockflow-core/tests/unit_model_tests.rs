//! Unit tests for the policy model
//!
//! Tests the public model API the way the authoring and evaluation layers use it

use anyhow::Result;
use blockflow_core::*;

// =============================================================================
// Construction
// =============================================================================

fn age_gate(variables: Variables) -> Policy {
    Policy::new(
        "age_gate",
        vec![
            DecisionBlock::start("start", "is_adult"),
            DecisionBlock::conditional("is_adult", "age", Operator::Ge, 18, "allow", "deny"),
            DecisionBlock::end("allow", 1.0),
            DecisionBlock::end("deny", 0.0),
        ],
        variables,
    )
}

#[test]
fn test_construct_and_list_blocks_in_order() {
    let policy = age_gate(Variables::new());
    let kinds: Vec<BlockKind> = policy.blocks().iter().map(|b| b.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Start,
            BlockKind::Conditional,
            BlockKind::End,
            BlockKind::End
        ]
    );
}

#[test]
fn test_start_blocks_listing() {
    let policy = age_gate(Variables::new());
    let starts: Vec<&StartBlock> = policy.start_blocks().collect();
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].next_block, "is_adult");
}

#[test]
fn test_lookup_conditional_fields() {
    let policy = age_gate(Variables::new());
    match policy.lookup("is_adult") {
        Some(DecisionBlock::Conditional(cond)) => {
            assert_eq!(cond.variable, "age");
            assert_eq!(cond.operator, Operator::Ge);
            assert_eq!(cond.value, Value::Number(18.0));
            assert_eq!(cond.true_branch, "allow");
            assert_eq!(cond.false_branch, "deny");
        }
        other => panic!("Expected conditional block, got {:?}", other),
    }
}

// =============================================================================
// Variables
// =============================================================================

#[test]
fn test_get_variable_coercion_is_stable() -> Result<()> {
    let policy = age_gate(Variables::from([("ratio", "3.14"), ("name", "abc")]));

    let first = policy.get_variable("ratio")?;
    let second = policy.get_variable("ratio")?;
    assert_eq!(first, second);
    assert_eq!(first.as_number(), Some("3.14".parse::<f64>()?));

    assert_eq!(policy.get_variable("name")?, Value::String("abc".to_string()));
    assert_eq!(policy.get_variable("name")?, Value::String("abc".to_string()));
    Ok(())
}

#[test]
fn test_get_variable_missing() {
    let policy = age_gate(Variables::new());
    let err = policy.get_variable("age").unwrap_err();
    assert!(matches!(err, CoreError::VariableNotFound(ref name) if name == "age"));
}

#[test]
fn test_negative_numbers_depend_on_mode() -> Result<()> {
    let vars = Variables::new().with("balance", "-5");
    assert_eq!(
        vars.resolve("balance", CoercionMode::Standard)?,
        Value::Number(-5.0)
    );
    assert_eq!(
        vars.resolve("balance", CoercionMode::Legacy)?,
        Value::String("-5".to_string())
    );
    Ok(())
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_policy_json_shape() -> Result<()> {
    let policy = age_gate(Variables::from([("age", "21")]));
    let json = serde_json::to_value(&policy)?;

    assert_eq!(json["name"], "age_gate");
    assert_eq!(json["id"], policy.id().to_string());
    assert_eq!(json["blocks"][0]["type"], "start");
    assert_eq!(json["blocks"][1]["operator"], ">=");
    assert_eq!(json["variables"]["age"], "21");
    Ok(())
}
