//! Application configuration
//!
//! Configuration loaded from .todo-goals.toml.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from .todo-goals.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Todo and goal names containing any of these terms are rejected (case-insensitive)
    #[serde(default = "default_blocked_terms")]
    pub blocked_terms: Vec<String>,

    /// Install the logging middleware
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,

    /// Dump the whole state after each committed action
    #[serde(default)]
    pub log_state: bool,

    /// Level the logging middleware writes at ("error" .. "trace")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Run the blocked-terms check before the logger, so rejected actions are not logged
    #[serde(default = "default_reject_before_logging")]
    pub reject_before_logging: bool,
}

fn default_blocked_terms() -> Vec<String> {
    vec!["bitcoin".to_string()]
}

fn default_log_actions() -> bool {
    true
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_reject_before_logging() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            blocked_terms: default_blocked_terms(),
            log_actions: default_log_actions(),
            log_state: false,
            log_level: default_log_level(),
            reject_before_logging: default_reject_before_logging(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }
}
