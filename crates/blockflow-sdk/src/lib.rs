//! Blockflow SDK
//!
//! High-level API for authoring, loading and evaluating decision policies.
//!
//! ```rust
//! use blockflow_sdk::{DecisionRequest, PolicyEngine, PolicyParser};
//!
//! let policy = PolicyParser::parse_yaml(r#"
//! name: age_gate
//! blocks:
//!   - {type: start, id: start, next_block: c1}
//!   - {type: conditional, id: c1, variable: age, operator: ">=", value: 18,
//!      true_branch: approve, false_branch: decline}
//!   - {type: end, id: approve, decision_value: 1}
//!   - {type: end, id: decline, decision_value: 0}
//! "#).unwrap();
//!
//! let engine = PolicyEngine::default();
//! let response = engine.decide(&policy, DecisionRequest::new([("age", "21")])).unwrap();
//! assert_eq!(response.decision, 1.0);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod policy_engine;

// Re-export main types
pub use builder::{generate_block_id, Branch, InsertedConditional, PolicyBuilder};
pub use config::EngineConfig;
pub use error::{Result, SdkError};
pub use policy_engine::{DecisionOptions, DecisionRequest, DecisionResponse, PolicyEngine};

// Re-export commonly used types from dependencies
pub use blockflow_core::{CoercionMode, DecisionBlock, Operator, Policy, PolicyId, Value, Variables};
pub use blockflow_parser::{ParseError, PolicyParser};
pub use blockflow_runtime::{EvaluationError, EvaluationTrace, ValidationError};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a `tracing` subscriber for hosts and tests.
///
/// The filter comes from `RUST_LOG` and defaults to `info` for the Blockflow
/// crates. `log` records from the core and parser crates are forwarded.
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "blockflow_sdk=info,blockflow_runtime=info,blockflow_parser=info,blockflow_core=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
