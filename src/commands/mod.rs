//! CLI command handlers

use crate::config::{Config, DatabaseOverrides};
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Check command functionality
pub mod check;
/// Show-config command functionality
pub mod show_config;

/// Load the configuration for a command and apply command-line overrides
pub fn resolve_config(path: Option<&Path>, overrides: &DatabaseOverrides) -> Result<Config> {
    let mut config = Config::load(path)?;
    config.apply_overrides(overrides)?;
    debug!("Effective database config: {:?}", config.database);
    Ok(config)
}
