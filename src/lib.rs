//! # UmlSketch
//!
//! Interaction core of the diagram canvas of a UML modeling tool:
//! - Focus, highlight and bounded multi-selection of diagram elements
//! - Press / move / release drag recognition
//! - Navigate, Edit, Create and Search tools
//! - Visible diagram resolution with fallback when diagrams disappear
//!
//! ## Architecture
//!
//! UmlSketch is organized as a workspace with multiple crates:
//!
//! 1. **umlsketch-core** - Identity types, selection set, store traits, errors
//! 2. **umlsketch-settings** - Configuration and persistence
//! 3. **umlsketch-area** - The sketch area controller
//! 4. **umlsketch** - This facade, plus logging setup
//!
//! The host owns the store, the layout engine and the widget. It feeds
//! pointer and key events into [`SketchArea::handle`] and carries out the
//! returned [`Effect`]s.

use std::path::Path;

pub use umlsketch_area as area;
pub use umlsketch_settings as settings;

pub use umlsketch_core::{
    ChangeKind, ChangeNotification, EntityRef, Error, FullRef, MemoryStore, Result,
    SelectionError, SelectionSet, Store, StoreError, StoreReader, StoreWriter, Table, UndoMode,
};

pub use umlsketch_settings::{Config, LoggingSettings, SettingsPersistence, SketchSettings};

pub use umlsketch_area::{
    Context, Effect, Key, KeyPress, LayoutQuery, SketchArea, SketchEvent, Tool, UserMessage,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// `RUST_LOG` takes precedence over `settings.level`. Output is pretty text
/// on stdout, or JSON lines when `settings.json` is set. Fails if a global
/// subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use anyhow::Context as _;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .with_context(|| format!("invalid log level '{}'", settings.level))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    if settings.json {
        let json_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_line_number(true);
        registry.with(json_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();
        registry.with(fmt_layer).try_init()
    }
    .context("a global tracing subscriber is already installed")?;

    tracing::debug!("UmlSketch {} ({}) logging ready", VERSION, BUILD_DATE);
    Ok(())
}

/// Loads and validates the configuration.
///
/// Without `path` the platform default location is used. A missing file
/// yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    use anyhow::Context as _;

    let path = match path {
        Some(path) => path.to_path_buf(),
        None => SettingsPersistence::default_path()?,
    };
    let persistence = SettingsPersistence::load_from_file(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let config = persistence.config().clone();
    config
        .validate()
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}
