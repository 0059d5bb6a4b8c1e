pub mod config;
pub mod inspect;
pub mod pick;
pub mod repair;
pub mod sample;

use std::path::Path;

use anyhow::{Context, Result};
use hexpick_core::config::PickerConfig;

/// Load and validate the config at `path`, or fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<PickerConfig> {
    let Some(path) = path else {
        return Ok(PickerConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: PickerConfig = toml::from_str(&contents).context("Invalid picker config")?;
    config
        .validate()
        .with_context(|| format!("Rejected config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
