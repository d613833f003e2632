//! Blockflow Core - Core types and definitions for Blockflow decision policies
//!
//! This crate provides the fundamental types used across the Blockflow workspace:
//! - Value types and raw-text coercion
//! - Policy model (blocks, operators, policy, variable bindings)
//! - Error types

pub mod ast;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use ast::{
    BlockKind, ConditionalBlock, DecisionBlock, EndBlock, Operator, Policy, PolicyDefinition,
    PolicyId, StartBlock, Variables,
};
pub use error::{CoreError, Result};
pub use types::{CoercionMode, Value};
