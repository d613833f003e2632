//! Configuration types for PolicyEngine

use blockflow_core::CoercionMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How raw variable text is turned into values
    pub coercion_mode: CoercionMode,

    /// Run eager validation before every evaluation
    pub validate_before_evaluate: bool,

    /// Attach the evaluation trace to every decision response
    pub enable_trace: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            coercion_mode: CoercionMode::Standard,
            validate_before_evaluate: false,
            enable_trace: false,
        }
    }

    /// Set the coercion mode
    pub fn with_coercion_mode(mut self, mode: CoercionMode) -> Self {
        self.coercion_mode = mode;
        self
    }

    /// Enable or disable eager validation
    pub fn validate_before_evaluate(mut self, enable: bool) -> Self {
        self.validate_before_evaluate = enable;
        self
    }

    /// Enable or disable tracing
    pub fn enable_trace(mut self, enable: bool) -> Self {
        self.enable_trace = enable;
        self
    }

    /// Load configuration from environment variables and config file
    ///
    /// Reads `.env` if present, then an optional `config/blockflow.{toml,yaml,json}`
    /// file, then `BLOCKFLOW_*` environment variables (e.g.
    /// `BLOCKFLOW_COERCION_MODE=legacy`). Later sources win. A missing file
    /// falls back to defaults; a file that cannot be read or parsed is an error.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_layered("config/blockflow")
    }

    /// Layer an optional config file (given without extension) under
    /// `BLOCKFLOW_*` environment variables
    pub fn load_layered(file_stem: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_stem = file_stem.as_ref();
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(&file_stem.to_string_lossy()).required(false))
            .add_source(config::Environment::with_prefix("BLOCKFLOW"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config: {}", e))?;

        let loaded: Self = cfg
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;
        tracing::info!("Loaded engine configuration: {:?}", loaded);
        Ok(loaded)
    }

    /// Load configuration from a specific file; the format follows the extension
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let cfg = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;

        let loaded: Self = cfg
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;
        tracing::info!("Loaded engine configuration from {}", path.display());
        Ok(loaded)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
