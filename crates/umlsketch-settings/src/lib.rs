//! UmlSketch Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, LoggingSettings, SketchSettings};
pub use error::{SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
