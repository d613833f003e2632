//! PolicyEngine - Main API for evaluating policies
//!
//! The module is organized into:
//! - `types`: Request/Response types (DecisionRequest, DecisionResponse, DecisionOptions)
//! - `engine`: Core PolicyEngine implementation
//! - `tests`: Unit tests (test-only)

mod engine;
mod types;

// Re-export public types
pub use engine::PolicyEngine;
pub use types::{DecisionOptions, DecisionRequest, DecisionResponse};

#[cfg(test)]
mod tests;
