//! Policy evaluator
//!
//! Walks a policy graph from its start block to an end block, resolving each
//! conditional by coercing and comparing a bound variable.

use crate::engine::operators::execute_compare;
use crate::error::{EvaluationError, Result};
use crate::result::{BlockTrace, ConditionTrace, Evaluation, EvaluationTrace};
use blockflow_core::{
    BlockKind, CoercionMode, DecisionBlock, EndBlock, Policy, StartBlock, Variables,
};
use std::collections::HashSet;

/// Deterministic, synchronous policy evaluator
///
/// The evaluator holds no per-evaluation state and never mutates the policy,
/// so one instance (and one policy) can serve any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEvaluator {
    coercion_mode: CoercionMode,
}

impl PolicyEvaluator {
    /// Create an evaluator using standard coercion
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coercion mode applied to variable text
    pub fn with_coercion_mode(mut self, mode: CoercionMode) -> Self {
        self.coercion_mode = mode;
        self
    }

    pub fn coercion_mode(&self) -> CoercionMode {
        self.coercion_mode
    }

    /// Evaluate a policy against its own variable bindings
    pub fn evaluate(&self, policy: &Policy) -> Result<f64> {
        self.evaluate_with(policy, policy.variables())
    }

    /// Evaluate a policy against caller-supplied variable bindings
    pub fn evaluate_with(&self, policy: &Policy, variables: &Variables) -> Result<f64> {
        self.traverse(policy, variables, None)
            .map(|end| end.decision_value)
    }

    /// Evaluate and record the path taken
    pub fn evaluate_detailed(&self, policy: &Policy, variables: &Variables) -> Result<Evaluation> {
        let mut trace = EvaluationTrace::new(policy.id());
        let end = self.traverse(policy, variables, Some(&mut trace))?;
        Ok(Evaluation {
            decision: end.decision_value,
            end_block: end.id.clone(),
            trace,
        })
    }

    fn traverse<'p>(
        &self,
        policy: &'p Policy,
        variables: &Variables,
        mut trace: Option<&mut EvaluationTrace>,
    ) -> Result<&'p EndBlock> {
        let start = locate_start(policy)?;
        if let Some(trace) = trace.as_deref_mut() {
            trace.push(BlockTrace::start(&start.id));
        }

        // Conditionals are visited at most once, so traversal is linear in
        // the number of blocks.
        let mut visited: HashSet<&'p str> = HashSet::new();
        visited.insert(start.id.as_str());

        let mut from = start.id.as_str();
        let mut current = start.next_block.as_str();

        loop {
            let block =
                policy
                    .lookup(current)
                    .ok_or_else(|| EvaluationError::DanglingBlockReference {
                        from: from.to_string(),
                        target: current.to_string(),
                    })?;

            match block {
                DecisionBlock::End(end) => {
                    tracing::debug!(
                        "Policy {} reached end block {} with decision {}",
                        policy.name(),
                        end.id,
                        end.decision_value
                    );
                    if let Some(trace) = trace.as_deref_mut() {
                        trace.push(BlockTrace::end(&end.id, end.decision_value));
                    }
                    return Ok(end);
                }

                DecisionBlock::Conditional(cond) => {
                    if !visited.insert(cond.id.as_str()) {
                        return Err(EvaluationError::CycleDetected {
                            block_id: cond.id.clone(),
                        });
                    }

                    let left = variables
                        .resolve(&cond.variable, self.coercion_mode)
                        .map_err(|_| EvaluationError::VariableNotFound(cond.variable.clone()))?;
                    let result = execute_compare(&cond.id, &left, cond.operator, &cond.value)?;

                    tracing::debug!(
                        "Block {}: {} {} {} -> {}",
                        cond.id,
                        left,
                        cond.operator,
                        cond.value,
                        result
                    );

                    if let Some(trace) = trace.as_deref_mut() {
                        trace.push(BlockTrace::conditional(
                            &cond.id,
                            ConditionTrace {
                                variable: cond.variable.clone(),
                                operator: cond.operator,
                                left_value: left,
                                right_value: cond.value.clone(),
                                result,
                            },
                        ));
                    }

                    from = cond.id.as_str();
                    current = if result {
                        cond.true_branch.as_str()
                    } else {
                        cond.false_branch.as_str()
                    };
                }

                DecisionBlock::Start(start) => {
                    return Err(EvaluationError::InvalidBlockType {
                        block_id: start.id.clone(),
                        kind: BlockKind::Start,
                    });
                }
            }
        }
    }
}

/// Find the policy's single start block
fn locate_start(policy: &Policy) -> Result<&StartBlock> {
    let mut starts = policy.start_blocks();
    match (starts.next(), starts.next()) {
        (Some(start), None) => Ok(start),
        (None, _) => Err(EvaluationError::MissingStartBlock { found: 0 }),
        (Some(_), Some(_)) => Err(EvaluationError::MissingStartBlock {
            found: policy.start_blocks().count(),
        }),
    }
}
