use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hexpick_core::config::PickerConfig;

/// Picker config named by `--config <path>`, or the defaults.
///
/// A file that cannot be read or fails validation is logged and replaced
/// by the defaults so the window still opens.
pub fn from_args() -> PickerConfig {
    let Some(path) = config_path(std::env::args().skip(1)) else {
        return PickerConfig::default();
    };
    match load(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded picker config");
            config
        }
        Err(e) => {
            tracing::error!("{e:#}; using defaults");
            PickerConfig::default()
        }
    }
}

fn config_path(mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(value) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(value));
        }
    }
    None
}

fn load(path: &Path) -> Result<PickerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: PickerConfig = toml::from_str(&text)
        .with_context(|| format!("Invalid picker config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
