//! Configuration types for the detection API mock

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Value served by `GET /status`
    #[serde(default = "default_status")]
    pub status: String,
    /// Starting value served by `GET /trash-count`
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub faults: FaultConfig,
    /// Delay applied before answering `/status` and `/trash-count`
    #[serde(default)]
    pub response_delay_ms: u64,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            status: default_status(),
            count: 0,
            faults: FaultConfig::default(),
            response_delay_ms: 0,
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Injected failures, as HTTP status codes returned instead of the normal body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultConfig {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub trash_count: Option<u16>,
}

fn default_port() -> u16 {
    8000
}

fn default_status() -> String {
    "Monitoring".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::MockError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
