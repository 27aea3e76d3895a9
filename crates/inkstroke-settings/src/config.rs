//! Configuration for the drawing surface
//!
//! Provides configuration file handling and validation. Supports JSON
//! and TOML formats, chosen by file extension.
//!
//! Configuration is organized into sections:
//! - Simplification (distance tolerance applied when a gesture ends)
//! - Stroke style (paint, width, caps and joins of committed strokes)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use inkstroke_core::StrokeStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory created under the platform config directory
pub const CONFIG_DIR_NAME: &str = "inkstroke";

/// File name used by [`Config::default_path`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Simplification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifySettings {
    /// Minimum distance, in surface units, between kept points
    pub tolerance: f64,
}

impl Default for SimplifySettings {
    fn default() -> Self {
        Self { tolerance: 2.0 }
    }
}

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete drawing configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simplification settings
    pub simplify: SimplifySettings,
    /// Style applied to committed strokes
    pub stroke: StrokeStyle,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/inkstroke/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or return defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let tolerance = self.simplify.tolerance;
        if inkstroke_core::validate_tolerance(tolerance).is_err() {
            return Err(ConfigError::ValueOutOfRange {
                key: "simplify.tolerance".to_string(),
                value: tolerance.to_string(),
            });
        }

        self.stroke.validate()?;
        Ok(())
    }
}
