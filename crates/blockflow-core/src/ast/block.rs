//! Decision block definitions
//!
//! A policy graph is made of three kinds of blocks:
//! - Start: the single entry point, pointing at the first block to visit
//! - Conditional: compares a variable against a threshold and branches
//! - End: terminal block carrying the decision value
//!
//! Blocks only reference each other by id. References are resolved when the
//! policy is evaluated, never at construction.

use crate::ast::Operator;
use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for the block variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Start,
    Conditional,
    End,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Start => "start",
            BlockKind::Conditional => "conditional",
            BlockKind::End => "end",
        };
        f.write_str(name)
    }
}

/// Entry point of a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartBlock {
    pub id: String,

    /// Id of the first block to visit
    pub next_block: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Branching block: `variable <operator> value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalBlock {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Name of the bound variable to look up
    pub variable: String,

    pub operator: Operator,

    /// Threshold the variable is compared against (usually a number)
    pub value: Value,

    /// Block visited when the comparison holds
    pub true_branch: String,

    /// Block visited when the comparison does not hold
    pub false_branch: String,
}

/// Terminal block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndBlock {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub decision_value: f64,
}

/// A node of the decision graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecisionBlock {
    Start(StartBlock),
    Conditional(ConditionalBlock),
    End(EndBlock),
}

impl DecisionBlock {
    /// Create a start block
    pub fn start(id: impl Into<String>, next_block: impl Into<String>) -> Self {
        DecisionBlock::Start(StartBlock {
            id: id.into(),
            next_block: next_block.into(),
            label: None,
        })
    }

    /// Create a conditional block
    pub fn conditional(
        id: impl Into<String>,
        variable: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
        true_branch: impl Into<String>,
        false_branch: impl Into<String>,
    ) -> Self {
        DecisionBlock::Conditional(ConditionalBlock {
            id: id.into(),
            label: None,
            variable: variable.into(),
            operator,
            value: value.into(),
            true_branch: true_branch.into(),
            false_branch: false_branch.into(),
        })
    }

    /// Create an end block
    pub fn end(id: impl Into<String>, decision_value: f64) -> Self {
        DecisionBlock::End(EndBlock {
            id: id.into(),
            label: None,
            decision_value,
        })
    }

    /// Attach a human-readable label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = Some(label.into());
        match &mut self {
            DecisionBlock::Start(block) => block.label = label,
            DecisionBlock::Conditional(block) => block.label = label,
            DecisionBlock::End(block) => block.label = label,
        }
        self
    }

    pub fn id(&self) -> &str {
        match self {
            DecisionBlock::Start(block) => &block.id,
            DecisionBlock::Conditional(block) => &block.id,
            DecisionBlock::End(block) => &block.id,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            DecisionBlock::Start(_) => BlockKind::Start,
            DecisionBlock::Conditional(_) => BlockKind::Conditional,
            DecisionBlock::End(_) => BlockKind::End,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            DecisionBlock::Start(block) => block.label.as_deref(),
            DecisionBlock::Conditional(block) => block.label.as_deref(),
            DecisionBlock::End(block) => block.label.as_deref(),
        }
    }

    /// Ids of the blocks this block can hand control to
    ///
    /// For conditionals the true branch comes first.
    pub fn successors(&self) -> Vec<&str> {
        match self {
            DecisionBlock::Start(block) => vec![block.next_block.as_str()],
            DecisionBlock::Conditional(block) => {
                vec![block.true_branch.as_str(), block.false_branch.as_str()]
            }
            DecisionBlock::End(_) => Vec::new(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DecisionBlock::End(_))
    }
}
