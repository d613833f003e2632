//! Evaluation result types

use crate::result::EvaluationTrace;
use serde::{Deserialize, Serialize};

/// Detailed outcome of a successful evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Decision value of the end block reached
    pub decision: f64,

    /// Id of the end block reached
    pub end_block: String,

    /// Blocks visited, in order
    pub trace: EvaluationTrace,
}
