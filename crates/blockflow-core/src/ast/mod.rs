//! Policy model
//!
//! The typed representation of a decision graph: blocks, the operators they
//! use, variable bindings and the policy that owns them.

pub mod block;
pub mod operator;
pub mod policy;
pub mod variables;

pub use block::{BlockKind, ConditionalBlock, DecisionBlock, EndBlock, StartBlock};
pub use operator::Operator;
pub use policy::{Policy, PolicyDefinition, PolicyId};
pub use variables::Variables;
