//! Blockflow Runtime - Evaluation engine for Blockflow decision policies
//!
//! This crate walks policy graphs from the start block to an end block and
//! provides the eager structural validator.

pub mod engine;
pub mod error;
pub mod result;
pub mod validation;

// Re-export main types
pub use engine::PolicyEvaluator;
pub use error::{EvaluationError, Result};
pub use result::{BlockTrace, ConditionTrace, Evaluation, EvaluationTrace};
pub use validation::{validate_policy, ValidationError, ValidationResult};
