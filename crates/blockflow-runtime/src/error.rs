//! Evaluation error types

use blockflow_core::{BlockKind, Operator, Value};
use thiserror::Error;

/// Failure of a single policy evaluation
///
/// Every variant is terminal: evaluation is a pure function of the policy and
/// its variables, so the same inputs always reproduce the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// Zero or more than one start block
    #[error("Policy must contain exactly one start block, found {found}")]
    MissingStartBlock { found: usize },

    /// A block references an id that is not in the policy
    #[error("Block '{from}' references unknown block '{target}'")]
    DanglingBlockReference { from: String, target: String },

    /// Traversal came back to a conditional block it already visited
    #[error("Cycle detected: block '{block_id}' visited twice")]
    CycleDetected { block_id: String },

    /// A conditional block references an unbound variable
    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    /// A relational operator was applied to a non-numeric operand
    #[error("Type mismatch at block '{block_id}': '{operator}' cannot compare {left} ({left_type}) with {right} ({right_type})", left_type = .left.type_name(), right_type = .right.type_name())]
    TypeMismatch {
        block_id: String,
        operator: Operator,
        left: Value,
        right: Value,
    },

    /// Traversal reached a block it cannot step through
    #[error("Invalid block type at '{block_id}': unexpected {kind} block")]
    InvalidBlockType { block_id: String, kind: BlockKind },
}

impl EvaluationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            EvaluationError::MissingStartBlock { .. } => "missing_start_block",
            EvaluationError::DanglingBlockReference { .. } => "dangling_block_reference",
            EvaluationError::CycleDetected { .. } => "cycle_detected",
            EvaluationError::VariableNotFound(_) => "variable_not_found",
            EvaluationError::TypeMismatch { .. } => "type_mismatch",
            EvaluationError::InvalidBlockType { .. } => "invalid_block_type",
        }
    }

    /// True when the caller's variable bindings caused the failure rather
    /// than the shape of the policy
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EvaluationError::VariableNotFound(_) | EvaluationError::TypeMismatch { .. }
        )
    }

    /// True when the policy graph itself is malformed
    pub fn is_policy_error(&self) -> bool {
        !self.is_input_error()
    }
}

/// Result type for evaluation
pub type Result<T> = std::result::Result<T, EvaluationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_start_block_message() {
        let error = EvaluationError::MissingStartBlock { found: 2 };
        assert_eq!(
            error.to_string(),
            "Policy must contain exactly one start block, found 2"
        );
        assert_eq!(error.code(), "missing_start_block");
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = EvaluationError::TypeMismatch {
            block_id: "c1".to_string(),
            operator: Operator::Lt,
            left: Value::String("hello".to_string()),
            right: Value::Number(5.0),
        };
        let message = error.to_string();
        assert!(message.contains("'<'"));
        assert!(message.contains("\"hello\" (string)"));
        assert!(message.contains("5 (number)"));
    }

    #[test]
    fn test_error_classification() {
        assert!(EvaluationError::VariableNotFound("age".to_string()).is_input_error());
        assert!(EvaluationError::CycleDetected {
            block_id: "c1".to_string()
        }
        .is_policy_error());
        assert!(EvaluationError::DanglingBlockReference {
            from: "c1".to_string(),
            target: "x".to_string()
        }
        .is_policy_error());
    }
}
