//! Evaluation tracing types
//!
//! These structures record the path an evaluation took through the policy
//! graph and the comparison made at every conditional block.

use blockflow_core::{BlockKind, Operator, PolicyId, Value};
use serde::{Deserialize, Serialize};

/// Trace of a single conditional comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionTrace {
    /// The variable looked up
    pub variable: String,

    /// The operator applied
    pub operator: Operator,

    /// The coerced variable value
    pub left_value: Value,

    /// The block's threshold
    pub right_value: Value,

    /// The comparison result
    pub result: bool,
}

impl ConditionTrace {
    /// Render the comparison as text (e.g. "age >= 18")
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.variable, self.operator, self.right_value)
    }
}

/// Trace of one visited block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTrace {
    pub block_id: String,

    pub kind: BlockKind,

    /// Comparison made (conditional blocks only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionTrace>,

    /// Decision value returned (end blocks only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_value: Option<f64>,
}

impl BlockTrace {
    pub fn start(block_id: &str) -> Self {
        Self {
            block_id: block_id.to_string(),
            kind: BlockKind::Start,
            condition: None,
            decision_value: None,
        }
    }

    pub fn conditional(block_id: &str, condition: ConditionTrace) -> Self {
        Self {
            block_id: block_id.to_string(),
            kind: BlockKind::Conditional,
            condition: Some(condition),
            decision_value: None,
        }
    }

    pub fn end(block_id: &str, decision_value: f64) -> Self {
        Self {
            block_id: block_id.to_string(),
            kind: BlockKind::End,
            condition: None,
            decision_value: Some(decision_value),
        }
    }
}

/// Ordered record of the blocks visited by one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationTrace {
    pub policy_id: PolicyId,

    pub steps: Vec<BlockTrace>,
}

impl EvaluationTrace {
    pub fn new(policy_id: PolicyId) -> Self {
        Self {
            policy_id,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, step: BlockTrace) {
        self.steps.push(step);
    }

    /// Ids of the visited blocks, start block first
    pub fn path(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.block_id.as_str()).collect()
    }

    /// Comparisons made along the way
    pub fn conditions(&self) -> impl Iterator<Item = &ConditionTrace> {
        self.steps.iter().filter_map(|s| s.condition.as_ref())
    }
}
