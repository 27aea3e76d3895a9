//! Inkstroke Settings Crate
//!
//! Handles drawing configuration: simplification tolerance and the
//! default stroke style, stored as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, SimplifySettings, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
