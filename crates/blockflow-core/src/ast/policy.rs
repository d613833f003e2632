//! Policy definitions
//!
//! A `Policy` is a named, read-only decision graph plus the variables bound
//! to it. Construction never fails: dangling references, duplicate ids or a
//! missing start block are only reported when the policy is evaluated or
//! explicitly validated, so policies can be assembled piece by piece.

use crate::ast::{DecisionBlock, StartBlock, Variables};
use crate::error::{CoreError, Result};
use crate::types::{CoercionMode, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier generated for every policy at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(Uuid);

impl PolicyId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PolicyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PolicyId {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CoreError::InvalidPolicyId(s.to_string()))
    }
}

/// Serializable shape of a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDefinition {
    /// Identifier; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PolicyId>,

    pub name: String,

    pub blocks: Vec<DecisionBlock>,

    #[serde(default)]
    pub variables: Variables,
}

/// A decision policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "PolicyDefinition", into = "PolicyDefinition")]
pub struct Policy {
    id: PolicyId,
    name: String,
    blocks: Vec<DecisionBlock>,
    /// Block id -> position in `blocks`; the first block with an id wins
    index: HashMap<String, usize>,
    variables: Variables,
}

impl Policy {
    /// Construct a policy with a freshly generated id
    pub fn new(
        name: impl Into<String>,
        blocks: impl IntoIterator<Item = DecisionBlock>,
        variables: impl Into<Variables>,
    ) -> Self {
        Self::with_id(PolicyId::new(), name, blocks, variables)
    }

    /// Construct a policy with a known id
    pub fn with_id(
        id: PolicyId,
        name: impl Into<String>,
        blocks: impl IntoIterator<Item = DecisionBlock>,
        variables: impl Into<Variables>,
    ) -> Self {
        let blocks: Vec<DecisionBlock> = blocks.into_iter().collect();
        let mut index = HashMap::with_capacity(blocks.len());
        for (position, block) in blocks.iter().enumerate() {
            index.entry(block.id().to_string()).or_insert(position);
        }

        Self {
            id,
            name: name.into(),
            blocks,
            index,
            variables: variables.into(),
        }
    }

    pub fn id(&self) -> PolicyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Blocks in insertion order
    pub fn blocks(&self) -> &[DecisionBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Find a block by id
    pub fn lookup(&self, block_id: &str) -> Option<&DecisionBlock> {
        self.index
            .get(block_id)
            .and_then(|&position| self.blocks.get(position))
    }

    /// All start blocks, in insertion order
    pub fn start_blocks(&self) -> impl Iterator<Item = &StartBlock> {
        self.blocks.iter().filter_map(|block| match block {
            DecisionBlock::Start(start) => Some(start),
            _ => None,
        })
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Resolve a bound variable with the standard coercion rules
    pub fn get_variable(&self, name: &str) -> Result<Value> {
        self.variables.resolve(name, CoercionMode::Standard)
    }

    /// The same graph (and id) bound to a different set of variables
    pub fn rebind(&self, variables: impl Into<Variables>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            blocks: self.blocks.clone(),
            index: self.index.clone(),
            variables: variables.into(),
        }
    }
}

impl From<PolicyDefinition> for Policy {
    fn from(definition: PolicyDefinition) -> Self {
        Policy::with_id(
            definition.id.unwrap_or_default(),
            definition.name,
            definition.blocks,
            definition.variables,
        )
    }
}

impl From<Policy> for PolicyDefinition {
    fn from(policy: Policy) -> Self {
        PolicyDefinition {
            id: Some(policy.id),
            name: policy.name,
            blocks: policy.blocks,
            variables: policy.variables,
        }
    }
}
