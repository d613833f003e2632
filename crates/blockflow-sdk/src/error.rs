//! SDK error types

use blockflow_runtime::ValidationError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Parser error
    #[error("Parser error: {0}")]
    ParseError(#[from] blockflow_parser::ParseError),

    /// Evaluation error
    #[error("Evaluation error: {0}")]
    EvaluationError(#[from] blockflow_runtime::EvaluationError),

    /// Eager validation found structural problems
    #[error("Validation failed: {}", join_errors(.0))]
    ValidationFailed(Vec<ValidationError>),

    /// Builder referenced a block that does not exist
    #[error("Unknown block: {0}")]
    UnknownBlock(String),

    /// Builder asked for an edge the block does not have
    #[error("Block '{block_id}' has no {branch} edge")]
    InvalidEdge { block_id: String, branch: String },
}

impl From<Vec<ValidationError>> for SdkError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SdkError::ValidationFailed(errors)
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
