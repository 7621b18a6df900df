//! Configuration loading and management for the `ocelot` binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Full configuration for an Ocelot run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OcelotConfig {
    /// Verification server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Proving circuit settings.
    #[serde(default)]
    pub circuit: CircuitConfig,

    /// Verification policy settings.
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the request-tracking server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitConfig {
    /// Path to the compiled circuit manifest.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Minimum age the proof must demonstrate.
    #[serde(default = "default_min_age")]
    pub min_age: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://ocelots-beta-server-f8ada60e3d7d.herokuapp.com".into()
}
fn default_manifest_path() -> PathBuf {
    PathBuf::from("./proof_age.json")
}
fn default_min_age() -> i64 {
    18
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_age: default_min_age(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl OcelotConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: OcelotConfig = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the current config to a TOML file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}
