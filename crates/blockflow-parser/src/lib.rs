//! Blockflow Parser - policy documents to Policy
//!
//! This crate reads YAML and JSON policy documents held in memory and turns
//! them into [`blockflow_core::Policy`] values, and writes policies back out.
//! Graph integrity is not checked here; see `blockflow_runtime::validate_policy`.

pub mod error;
pub mod policy_parser;
pub mod yaml_parser;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use policy_parser::PolicyParser;
pub use yaml_parser::YamlParser;
