//! Settings Persistence
//!
//! Handles loading and saving the configuration from/to the platform
//! configuration directory.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

/// Name of the application directory below the platform config directory.
pub const CONFIG_DIR_NAME: &str = "umlsketch";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings persistence layer
#[derive(Debug, Clone, Default)]
pub struct SettingsPersistence {
    config: Config,
}

impl SettingsPersistence {
    /// Create new persistence layer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the default configuration file path for this platform.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load settings from file; a missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::new());
        }
        let config = Config::load_from_file(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(Self { config })
    }

    /// Save settings to file, creating the parent directory if needed.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.config.save_to_file(path)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
