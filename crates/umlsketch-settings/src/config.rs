//! Configuration for the sketch area
//!
//! Configuration is organized into logical sections:
//! - Sketch settings (drag threshold, card limits, name stems)
//! - Logging preferences
//!
//! Every field has a default, so partial files are accepted.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sketch area behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchSettings {
    /// Pointer travel in pixels before a press turns into a drag
    pub drag_threshold_px: i32,
    /// Maximum number of child diagram cards shown in navigate mode
    pub max_cards: usize,
    /// Name stem for diagrams created from the navigation buttons
    pub new_diagram_name: String,
    /// Name stem for classifiers created in create mode
    pub new_classifier_name: String,
    /// Name stem for features created in create mode
    pub new_feature_name: String,
    /// Name stem for relationships created in create mode
    pub new_relationship_name: String,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            drag_threshold_px: 5,
            max_cards: 32,
            new_diagram_name: "New Overview".to_string(),
            new_classifier_name: "New Class".to_string(),
            new_feature_name: "new_feature".to_string(),
            new_relationship_name: "new relation".to_string(),
        }
    }
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of pretty text
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Sketch area settings
    pub sketch: SketchSettings,
    /// Logging preferences
    pub logging: LoggingSettings,
}

impl Config {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.sketch.max_cards == 0 {
            return Err(SettingsError::ValueOutOfRange {
                key: "sketch.max_cards".to_string(),
                value: self.sketch.max_cards.to_string(),
            });
        }

        if self.sketch.drag_threshold_px < 0 {
            return Err(SettingsError::ValueOutOfRange {
                key: "sketch.drag_threshold_px".to_string(),
                value: self.sketch.drag_threshold_px.to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::ValueOutOfRange {
                key: "logging.level".to_string(),
                value: self.logging.level.clone(),
            });
        }

        Ok(())
    }
}
