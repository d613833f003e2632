//! Builder for authoring policies incrementally
//!
//! # Example
//!
//! ```rust
//! use blockflow_sdk::{Branch, Operator, PolicyBuilder};
//!
//! let mut builder = PolicyBuilder::new("age_gate")
//!     .start("start", "approve")
//!     .end("approve", 1.0)
//!     .variable("age", "16");
//!
//! // Gate the approval behind an age check; minors land on a new End block
//! let inserted = builder
//!     .insert_conditional_after("start", Branch::Next, "age", Operator::Lt, 18, 0.0)
//!     .unwrap();
//!
//! let policy = builder.build();
//! assert_eq!(policy.lookup(&inserted.end_id).map(|b| b.is_terminal()), Some(true));
//! ```

use crate::error::{Result, SdkError};
use blockflow_core::{DecisionBlock, Operator, Policy, PolicyId, Value, Variables};
use blockflow_runtime::validate_policy;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

const BLOCK_ID_LENGTH: usize = 10;

/// Generate a random 10-character alphanumeric block id
pub fn generate_block_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BLOCK_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Outgoing edge of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// A start block's only edge
    Next,
    /// A conditional's edge taken when the comparison holds
    True,
    /// A conditional's edge taken when it does not
    False,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Next => write!(f, "next"),
            Branch::True => write!(f, "true"),
            Branch::False => write!(f, "false"),
        }
    }
}

/// Ids of the blocks created by [`PolicyBuilder::insert_conditional_after`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedConditional {
    pub conditional_id: String,
    pub end_id: String,
}

/// Builder for Policy
///
/// Blocks are kept in insertion order. Nothing is checked until
/// [`build_validated`](Self::build_validated), so half-finished graphs can be
/// assembled step by step.
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    id: Option<PolicyId>,
    name: String,
    blocks: Vec<DecisionBlock>,
    variables: Variables,
}

impl PolicyBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            blocks: Vec::new(),
            variables: Variables::new(),
        }
    }

    /// Start from an existing policy, keeping its id
    pub fn from_policy(policy: &Policy) -> Self {
        Self {
            id: Some(policy.id()),
            name: policy.name().to_string(),
            blocks: policy.blocks().to_vec(),
            variables: policy.variables().clone(),
        }
    }

    /// Use a fixed policy id instead of a freshly generated one
    pub fn with_id(mut self, id: PolicyId) -> Self {
        self.id = Some(id);
        self
    }

    /// Add a start block
    pub fn start(self, id: impl Into<String>, next_block: impl Into<String>) -> Self {
        self.block(DecisionBlock::start(id, next_block))
    }

    /// Add a conditional block
    pub fn conditional(
        self,
        id: impl Into<String>,
        variable: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
        true_branch: impl Into<String>,
        false_branch: impl Into<String>,
    ) -> Self {
        self.block(DecisionBlock::conditional(
            id,
            variable,
            operator,
            value,
            true_branch,
            false_branch,
        ))
    }

    /// Add an end block
    pub fn end(self, id: impl Into<String>, decision_value: f64) -> Self {
        self.block(DecisionBlock::end(id, decision_value))
    }

    /// Add an arbitrary block
    pub fn block(mut self, block: DecisionBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Bind a variable
    pub fn variable(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.variables.insert(name, raw);
        self
    }

    /// Blocks added so far
    pub fn blocks(&self) -> &[DecisionBlock] {
        &self.blocks
    }

    /// Splice a new conditional onto the `branch` edge leaving `source_id`.
    ///
    /// The edge is redirected to the new conditional. Its true branch leads to
    /// a new End block carrying `decision_value`; its false branch leads to
    /// whatever the edge pointed at before.
    pub fn insert_conditional_after(
        &mut self,
        source_id: &str,
        branch: Branch,
        variable: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
        decision_value: f64,
    ) -> Result<InsertedConditional> {
        let conditional_id = self.fresh_block_id(&[]);
        let end_id = self.fresh_block_id(&[conditional_id.as_str()]);

        let source = self
            .blocks
            .iter_mut()
            .find(|block| block.id() == source_id)
            .ok_or_else(|| SdkError::UnknownBlock(source_id.to_string()))?;

        let edge = match (source, branch) {
            (DecisionBlock::Start(start), Branch::Next) => &mut start.next_block,
            (DecisionBlock::Conditional(cond), Branch::True) => &mut cond.true_branch,
            (DecisionBlock::Conditional(cond), Branch::False) => &mut cond.false_branch,
            _ => {
                return Err(SdkError::InvalidEdge {
                    block_id: source_id.to_string(),
                    branch: branch.to_string(),
                })
            }
        };
        let previous_target = std::mem::replace(edge, conditional_id.clone());

        tracing::debug!(
            "Inserted conditional {} on {} edge of {} (was -> {})",
            conditional_id,
            branch,
            source_id,
            previous_target
        );

        self.blocks.push(DecisionBlock::end(end_id.clone(), decision_value));
        self.blocks.push(DecisionBlock::conditional(
            conditional_id.clone(),
            variable,
            operator,
            value,
            end_id.clone(),
            previous_target,
        ));

        Ok(InsertedConditional {
            conditional_id,
            end_id,
        })
    }

    /// Build the policy without checking its structure
    pub fn build(self) -> Policy {
        match self.id {
            Some(id) => Policy::with_id(id, self.name, self.blocks, self.variables),
            None => Policy::new(self.name, self.blocks, self.variables),
        }
    }

    /// Build the policy and run eager validation on it
    pub fn build_validated(self) -> Result<Policy> {
        let policy = self.build();
        validate_policy(&policy)?;
        Ok(policy)
    }

    fn fresh_block_id(&self, reserved: &[&str]) -> String {
        loop {
            let id = generate_block_id();
            let taken = reserved.contains(&id.as_str())
                || self.blocks.iter().any(|block| block.id() == id);
            if !taken {
                return id;
            }
        }
    }
}
