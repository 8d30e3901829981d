//! Logging setup using env_logger
//!
//! `RUST_LOG` wins; without it the filter follows the configured
//! middleware level so action logs are visible.

use anyhow::{Context, Result};
use env_logger::Env;
use todo_goals_config::AppConfig;

pub fn init(config: &AppConfig) -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .format_timestamp_millis()
        .try_init()
        .context("Logger already initialized")
}
