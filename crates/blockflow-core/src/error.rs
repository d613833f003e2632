//! Error types for Blockflow Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("Invalid policy id: {0}")]
    InvalidPolicyId(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_not_found_message() {
        let error = CoreError::VariableNotFound("age".to_string());
        assert_eq!(error.to_string(), "Variable not found: age");
    }

    #[test]
    fn test_invalid_operator_message() {
        let error = CoreError::InvalidOperator("=~".to_string());
        assert!(error.to_string().contains("Invalid operator"));
        assert!(error.to_string().contains("=~"));
    }
}
