//! Request/Response types for PolicyEngine

use blockflow_core::{PolicyId, Variables};
use blockflow_runtime::EvaluationTrace;
use serde::{Deserialize, Serialize};

/// Decision request options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionOptions {
    /// Enable detailed execution tracing
    #[serde(default)]
    pub enable_trace: bool,
}

/// Decision request
///
/// Request variables are layered over the policy's own bindings; a name
/// present in both resolves to the request's value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Raw variable bindings for this request
    #[serde(default)]
    pub variables: Variables,

    /// Request options (including trace enablement)
    #[serde(default)]
    pub options: DecisionOptions,
}

impl DecisionRequest {
    /// Create a new decision request
    pub fn new(variables: impl Into<Variables>) -> Self {
        Self {
            variables: variables.into(),
            options: DecisionOptions::default(),
        }
    }

    /// Bind one more variable
    pub fn with_variable(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.variables.insert(name, raw);
        self
    }

    /// Enable execution tracing
    pub fn with_trace(mut self) -> Self {
        self.options.enable_trace = true;
        self
    }
}

/// Decision response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub policy_id: PolicyId,

    pub policy_name: String,

    /// Decision value of the End block reached
    pub decision: f64,

    /// Id of the End block reached
    pub end_block: String,

    /// Path taken, when tracing was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<EvaluationTrace>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
