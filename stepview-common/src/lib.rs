//! StepView Common Library
//!
//! This crate provides the framework-independent core of the StepView
//! progress indicator:
//!
//! - [`indicator`] - Validated indicator state, classification and draw-command generation
//! - [`geometry`] - Extent computation and per-step shape placement
//! - [`config`] - Configuration types and loading (JSON5 format)
//! - [`color`] - Color parsing
//! - [`error`] - Error types

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod indicator;

// Re-export commonly used types at the crate root
pub use color::Rgba;
pub use config::{
    Axis, Direction, LogFormat, LoggingConfig, Orientation, StepConfig, Viewport, load_config,
    parse_config,
};
pub use error::{ConfigError, Error, Result};
pub use geometry::{Extent, Point, Primitive, Size, StepStatus};
pub use indicator::{DrawSurface, StepIndicator};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// # Example
///
/// ```ignore
/// use stepview_common::{LoggingConfig, LogFormat, init_tracing};
///
/// let config = LoggingConfig {
///     level: "debug".to_string(),
///     format: LogFormat::Text,
/// };
/// init_tracing(&config)?;
/// ```
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
