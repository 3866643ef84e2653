//! # Configuration
//!
//! Settings with a small override hierarchy: defaults → config file. The
//! browser itself takes no flags, so the file is the whole surface.
//!
//! Config lives at `~/.perch/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover the options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PerchConfig {
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BehaviorConfig {
    /// Rewind the file view to the top whenever the directory cursor moves
    /// to a different entry. Off by default: the scroll offset carries over
    /// between files.
    pub reset_scroll_on_select: Option<bool>,
}

pub const DEFAULT_RESET_SCROLL_ON_SELECT: bool = false;

/// Concrete values, no Options.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub reset_scroll_on_select: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Returns the path to `~/.perch/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".perch").join("config.toml"))
}

/// Returns the path to `~/.perch/perch.log`.
pub fn log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".perch").join("perch.log"))
}

/// Load config from `~/.perch/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PerchConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PerchConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PerchConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PerchConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PerchConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Perch Configuration
# All settings are optional; defaults are used for anything not specified.

# [behavior]
# reset_scroll_on_select = false   # Rewind the file view when the cursor
#                                  # moves to a different entry
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

/// Resolve the final config by collapsing defaults and file values.
pub fn resolve(config: &PerchConfig) -> ResolvedConfig {
    ResolvedConfig {
        reset_scroll_on_select: config
            .behavior
            .reset_scroll_on_select
            .unwrap_or(DEFAULT_RESET_SCROLL_ON_SELECT),
    }
}
