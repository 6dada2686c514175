//! Configuration module.

pub mod loader;

pub use loader::{
    default_config_path, default_log_path, load_config_file, load_config_with_precedence,
    merge_config, ConfigError, ConfigFile, ResolvedConfig,
};

use crate::constants;

/// Fixed chrome dimensions fed to the inset computation.
///
/// The defaults come from [`constants`]; a config file may override either
/// value (see [`merge_config`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChromeMetrics {
    /// Filmstrip thickness in device-independent pixels.
    pub filmstrip_size: u16,

    /// Toolbox control-bar height in device-independent pixels.
    pub hangup_button_size: u16,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            filmstrip_size: constants::FILMSTRIP_SIZE,
            hangup_button_size: constants::HANGUP_BUTTON_SIZE,
        }
    }
}
