//! Core PolicyEngine implementation

use super::types::{DecisionRequest, DecisionResponse};
use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use blockflow_core::Policy;
use blockflow_runtime::{validate_policy, PolicyEvaluator};

/// Evaluates policies according to an [`EngineConfig`].
///
/// The engine holds no per-policy state, so one instance can serve any
/// number of policies from any number of threads.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    config: EngineConfig,
    evaluator: PolicyEvaluator,
}

impl PolicyEngine {
    /// Create a new engine
    pub fn new(config: EngineConfig) -> Self {
        let evaluator = PolicyEvaluator::new().with_coercion_mode(config.coercion_mode);
        Self { config, evaluator }
    }

    /// Create an engine from `.env`, `config/blockflow` and `BLOCKFLOW_*` settings
    pub fn from_env() -> Result<Self> {
        let config = EngineConfig::load().map_err(|e| SdkError::ConfigError(e.to_string()))?;
        Ok(Self::new(config))
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a policy against its own variable bindings
    pub fn evaluate(&self, policy: &Policy) -> Result<f64> {
        if self.config.validate_before_evaluate {
            self.validate(policy)?;
        }

        self.evaluator.evaluate(policy).map_err(|e| {
            tracing::warn!("Evaluation of policy {} failed: {}", policy.name(), e);
            SdkError::from(e)
        })
    }

    /// Evaluate a policy for one request
    pub fn decide(&self, policy: &Policy, request: DecisionRequest) -> Result<DecisionResponse> {
        let start = std::time::Instant::now();

        if self.config.validate_before_evaluate {
            self.validate(policy)?;
        }

        let mut variables = policy.variables().clone();
        for (name, raw) in request.variables.iter() {
            variables.insert(name, raw);
        }

        let evaluation = self
            .evaluator
            .evaluate_detailed(policy, &variables)
            .map_err(|e| {
                tracing::warn!(
                    "Decision for policy {} ({}) failed: {}",
                    policy.name(),
                    policy.id(),
                    e
                );
                SdkError::from(e)
            })?;

        let enable_trace = request.options.enable_trace || self.config.enable_trace;
        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            "Policy {} decided {} via {} in {}ms",
            policy.name(),
            evaluation.decision,
            evaluation.end_block,
            processing_time_ms
        );

        Ok(DecisionResponse {
            policy_id: policy.id(),
            policy_name: policy.name().to_string(),
            decision: evaluation.decision,
            end_block: evaluation.end_block,
            trace: enable_trace.then_some(evaluation.trace),
            processing_time_ms,
        })
    }

    /// Run eager structural validation
    pub fn validate(&self, policy: &Policy) -> Result<()> {
        validate_policy(policy).map_err(|errors| {
            tracing::warn!(
                "Policy {} failed validation with {} error(s)",
                policy.name(),
                errors.len()
            );
            SdkError::ValidationFailed(errors)
        })
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
