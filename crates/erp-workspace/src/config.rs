//! Workspace configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use erp_tabs::ActivationPolicy;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What activating an id with no open tab does
    pub activation_policy: ActivationPolicy,
    /// Default `tracing` filter directive when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            activation_policy: ActivationPolicy::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a JSON document. Missing keys take their default value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;

        tracing::debug!(
            path = %path.display(),
            activation_policy = %config.activation_policy,
            "Loaded workspace config"
        );

        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Install the global subscriber using `log_filter` as the fallback
    /// directive. A second call is a no-op.
    pub fn init_logging(&self) {
        crate::init_logging(&self.log_filter);
    }

    fn validate(&self) -> Result<()> {
        tracing_subscriber::EnvFilter::try_new(&self.log_filter)
            .map_err(|e| CoreError::Config(format!("invalid log_filter: {e}")))?;
        Ok(())
    }
}
