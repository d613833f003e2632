//! Evaluation engine module
//!
//! Provides the evaluator that walks policy graphs.

pub mod evaluator;
mod operators;

// Re-export for convenience
pub use evaluator::PolicyEvaluator;

// Tests module (only compiled in test mode)
#[cfg(test)]
mod tests;
