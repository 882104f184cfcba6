//! Daemon configuration.
//!
//! The startup shim itself takes no options; configuration covers only the
//! ambient daemon wiring: adapter display name, how long the host waits for
//! deferral completion, and log output format.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use dsb_common::{BridgeError, BridgeResult};

/// headlessd configuration, loadable from a TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadlessConfig {
    /// Display name given to the constructed adapter.
    pub adapter_name: String,

    /// How long the host waits for the activation to signal completion,
    /// in milliseconds.
    pub completion_timeout_ms: u64,

    /// Emit JSON-formatted log lines instead of the human-readable format.
    pub log_json: bool,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            adapter_name: mock_adapter::DEFAULT_ADAPTER_NAME.to_string(),
            completion_timeout_ms: 5_000,
            log_json: false,
        }
    }
}

impl HeadlessConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> BridgeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| BridgeError::config(e.to_string()))
    }

    /// Loads configuration from `path` if given, falling back to defaults
    /// when no path is provided or the file cannot be used.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(config) => config,
                Err(err) => {
                    warn!(path = %path.display(), %err, "failed to load config, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// The completion timeout as a [`Duration`].
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_millis(self.completion_timeout_ms)
    }
}
