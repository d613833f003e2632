//! Eager policy validation
//!
//! Evaluation checks the graph lazily and stops at the first problem on the
//! path it takes. `validate_policy` instead inspects the whole graph up front
//! and reports every structural problem it finds:
//! - Block id uniqueness
//! - Exactly one start block
//! - Reference validity (no dangling ids, nothing points back at the start)
//! - Cycles reachable from the start block
//! - Unreachable blocks
//! - At least one end block
//! - Numeric thresholds for ordering operators
//!
//! A policy that validates cleanly can only fail evaluation because of its
//! variable bindings (`VariableNotFound`, `TypeMismatch`).

use blockflow_core::{DecisionBlock, Operator, Policy, StartBlock, Value};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Structural problems found by [`validate_policy`]
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(String),

    #[error("Policy must contain exactly one start block, found {found}")]
    MissingStartBlock { found: usize },

    #[error("Block '{from}' references unknown block '{target}'")]
    DanglingReference { from: String, target: String },

    #[error("Block '{from}' points back at the start block")]
    StartBlockTargeted { from: String },

    #[error("Cycle detected through block '{block_id}'")]
    CycleDetected { block_id: String },

    #[error("Unreachable block: {0}")]
    UnreachableBlock(String),

    #[error("Policy has no end block")]
    NoEndBlock,

    #[error("Block '{block_id}' applies '{operator}' to a non-numeric threshold")]
    NonNumericThreshold { block_id: String, operator: Operator },
}

/// Validation result
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate a policy graph before evaluation
///
/// Runs all checks and returns every error found, in block order.
pub fn validate_policy(policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(e) = validate_unique_ids(policy) {
        errors.extend(e);
    }

    let start = match validate_single_start(policy) {
        Ok(start) => Some(start),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    if let Err(e) = validate_references(policy) {
        errors.extend(e);
    }

    if let Err(e) = validate_end_blocks(policy) {
        errors.extend(e);
    }

    if let Err(e) = validate_thresholds(policy) {
        errors.extend(e);
    }

    // Graph walks need a single entry point
    if let Some(start) = start {
        if let Err(e) = validate_graph(policy, start) {
            errors.extend(e);
        }
    }

    if errors.is_empty() {
        tracing::debug!("Policy {} passed validation", policy.name());
        Ok(())
    } else {
        tracing::debug!(
            "Policy {} failed validation with {} error(s)",
            policy.name(),
            errors.len()
        );
        Err(errors)
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_ids(policy: &Policy) -> ValidationResult {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for block in policy.blocks() {
        let id = block.id();
        if !seen.insert(id) && reported.insert(id) {
            errors.push(ValidationError::DuplicateBlockId(id.to_string()));
        }
    }

    into_result(errors)
}

fn validate_single_start(policy: &Policy) -> Result<&StartBlock, ValidationError> {
    let starts: Vec<&StartBlock> = policy.start_blocks().collect();
    match starts.as_slice() {
        [start] => Ok(start),
        _ => Err(ValidationError::MissingStartBlock {
            found: starts.len(),
        }),
    }
}

fn validate_references(policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();

    for block in policy.blocks() {
        for target in block.successors() {
            match policy.lookup(target) {
                None => errors.push(ValidationError::DanglingReference {
                    from: block.id().to_string(),
                    target: target.to_string(),
                }),
                Some(DecisionBlock::Start(_)) => errors.push(ValidationError::StartBlockTargeted {
                    from: block.id().to_string(),
                }),
                Some(_) => {}
            }
        }
    }

    into_result(errors)
}

fn validate_end_blocks(policy: &Policy) -> ValidationResult {
    if policy.blocks().iter().any(DecisionBlock::is_terminal) {
        Ok(())
    } else {
        Err(vec![ValidationError::NoEndBlock])
    }
}

fn validate_thresholds(policy: &Policy) -> ValidationResult {
    let errors = policy
        .blocks()
        .iter()
        .filter_map(|block| match block {
            DecisionBlock::Conditional(cond)
                if cond.operator.is_relational() && matches!(cond.value, Value::String(_)) =>
            {
                Some(ValidationError::NonNumericThreshold {
                    block_id: cond.id.clone(),
                    operator: cond.operator,
                })
            }
            _ => None,
        })
        .collect();

    into_result(errors)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Depth-first walk from the start block: reports back edges as cycles and
/// every block the walk never reaches as unreachable
fn validate_graph(policy: &Policy, start: &StartBlock) -> ValidationResult {
    let mut errors = Vec::new();
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut cycles_reported: HashSet<&str> = HashSet::new();

    let Some(entry) = policy.lookup(&start.id) else {
        return Ok(());
    };
    marks.insert(start.id.as_str(), Mark::InProgress);
    let mut stack: Vec<(&DecisionBlock, usize)> = vec![(entry, 0)];

    while let Some((block, next_child)) = stack.last_mut() {
        let block: &DecisionBlock = *block;
        let successors = block.successors();

        let Some(&target) = successors.get(*next_child) else {
            marks.insert(block.id(), Mark::Done);
            stack.pop();
            continue;
        };
        *next_child += 1;

        // Dangling ids and edges into the start block are reported by
        // validate_references
        let Some(next) = policy.lookup(target) else {
            continue;
        };
        if matches!(next, DecisionBlock::Start(_)) {
            continue;
        }

        match marks.get(next.id()) {
            Some(Mark::InProgress) => {
                if cycles_reported.insert(next.id()) {
                    errors.push(ValidationError::CycleDetected {
                        block_id: next.id().to_string(),
                    });
                }
            }
            Some(Mark::Done) => {}
            None => {
                marks.insert(next.id(), Mark::InProgress);
                stack.push((next, 0));
            }
        }
    }

    let mut unreachable_reported = HashSet::new();
    for block in policy.blocks() {
        let id = block.id();
        if !marks.contains_key(id) && unreachable_reported.insert(id) {
            errors.push(ValidationError::UnreachableBlock(id.to_string()));
        }
    }

    into_result(errors)
}
