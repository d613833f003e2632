//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use blockflow_sdk::{DecisionResponse, Policy, PolicyParser};

/// Start -> income > 50000 ? (score >= 700 ? approve : review) : reject
pub const CREDIT_POLICY: &str = r#"
name: credit
blocks:
  - type: start
    id: start
    next_block: income
  - type: conditional
    id: income
    label: Income check
    variable: income
    operator: greater_than
    value: 50000
    true_branch: score
    false_branch: reject
  - type: conditional
    id: score
    variable: score
    operator: ">="
    value: 700
    true_branch: approve
    false_branch: review
  - type: end
    id: approve
    decision_value: 1
  - type: end
    id: review
    decision_value: 0.5
  - type: end
    id: reject
    decision_value: 0
variables:
  income: 60000
  score: 650
"#;

/// Parse a YAML policy, panicking with the parse error on failure
pub fn load(yaml: &str) -> Policy {
    PolicyParser::parse_yaml(yaml).unwrap_or_else(|e| panic!("fixture failed to parse: {}", e))
}

/// Assertion helpers for decision responses
pub trait ResponseAssertions {
    fn assert_decision(&self, expected: f64);
    fn assert_end_block(&self, expected: &str);
    fn assert_path(&self, expected: &[&str]);
}

impl ResponseAssertions for DecisionResponse {
    fn assert_decision(&self, expected: f64) {
        assert_eq!(
            self.decision, expected,
            "Expected decision {}, got {}",
            expected, self.decision
        );
    }

    fn assert_end_block(&self, expected: &str) {
        assert_eq!(
            self.end_block, expected,
            "Expected end block {}, got {}",
            expected, self.end_block
        );
    }

    fn assert_path(&self, expected: &[&str]) {
        let trace = self
            .trace
            .as_ref()
            .unwrap_or_else(|| panic!("response carries no trace"));
        assert_eq!(trace.path(), expected, "Unexpected path");
    }
}
