//! # Inkstroke
//!
//! Freehand stroke capture for vector drawing surfaces:
//! - Path string codec for `M`/`L` polylines
//! - Distance-threshold point decimation
//! - Toolkit-independent gesture recorder
//! - JSON/TOML configuration for tolerance and stroke style
//!
//! ## Architecture
//!
//! Inkstroke is organized as a workspace with multiple crates:
//!
//! 1. **inkstroke-core** - Point, stroke style, errors
//! 2. **inkstroke-path** - Parse, simplify, stringify
//! 3. **inkstroke-gesture** - Idle/Drawing state machine, committed strokes
//! 4. **inkstroke-settings** - Configuration files
//! 5. **inkstroke** - This facade, logging setup
//!
//! ## Usage
//!
//! ```rust
//! use inkstroke::{recorder_from_config, Config, GestureEvent, Point};
//!
//! let mut recorder = recorder_from_config(&Config::default()).unwrap();
//! recorder.handle(GestureEvent::Start(Point::new(0.0, 0.0)));
//! recorder.handle(GestureEvent::Move(Point::new(0.0, 12.0)));
//! let stroke = recorder.handle(GestureEvent::End).unwrap();
//! assert_eq!(stroke.path, "M0 0 L0 12");
//! ```

pub use inkstroke_core::{validate_tolerance, Error, LineCap, LineJoin, Point, Result, StrokeStyle};

pub use inkstroke_path::{
    format_coordinate, move_to, parse, parse_coordinate, push_line_to, simplify,
    simplify_observed, stringify, NoopObserver, SimplifyObserver, SimplifyStats, TracingObserver,
    DEFAULT_TOLERANCE,
};

pub use inkstroke_gesture::{GestureEvent, GestureState, Stroke, StrokeRecorder, GESTURE_TOLERANCE};

pub use inkstroke_settings::{
    Config, ConfigError, ConfigResult, SettingsError, SettingsResult, SimplifySettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Build a recorder that uses the configured tolerance and stroke style.
pub fn recorder_from_config(config: &Config) -> Result<StrokeRecorder> {
    Ok(StrokeRecorder::try_new(config.simplify.tolerance)?.with_style(config.stroke.clone()))
}

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::default())
}

/// Initialize logging with the given output format.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    tracing::debug!("Logging initialized ({:?})", format);
    Ok(())
}
