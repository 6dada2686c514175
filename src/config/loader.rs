//! Configuration file loading with precedence handling.

use crate::config::ChromeMetrics;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a regular file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, built-in defaults are used.
/// Corresponds to `~/.config/confview/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Filmstrip thickness override in device-independent pixels.
    #[serde(default)]
    pub filmstrip_size: Option<u16>,

    /// Toolbox control-bar height override in device-independent pixels.
    #[serde(default)]
    pub hangup_button_size: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after merging file values over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Chrome dimensions fed to the inset computation.
    pub metrics: ChromeMetrics,

    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            metrics: ChromeMetrics::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/confview/confview.log` on Unix-like systems, or
/// the appropriate platform path elsewhere. Falls back to the current
/// directory if the state directory cannot be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("confview").join("confview.log")
    } else {
        PathBuf::from("confview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - defaults
/// apply). Returns `Err` if the file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/confview/config.toml` on Unix, the appropriate path
/// on other platforms. Returns `None` if the config directory cannot be
/// determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("confview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument
/// 2. `CONFVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/confview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    // 1. Explicit path
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    // 2. CONFVIEW_CONFIG environment variable
    if let Ok(env_path) = std::env::var("CONFVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    // 3. Default path
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    // No config path available
    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        metrics: ChromeMetrics {
            filmstrip_size: config
                .filmstrip_size
                .unwrap_or(defaults.metrics.filmstrip_size),
            hangup_button_size: config
                .hangup_button_size
                .unwrap_or(defaults.metrics.hangup_button_size),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
