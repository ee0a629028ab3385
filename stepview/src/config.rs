//! Demo application configuration.

use serde::{Deserialize, Serialize};

use stepview_common::{LoggingConfig, StepConfig, Viewport};

/// Configuration file for the demo application (JSON5).
///
/// ```text
/// {
///     indicator: { total_steps: 9, current_step: 2, orientation: "horizontal_left_to_right" },
///     viewport: { width: 1280, height: 720 },
///     logging: { level: "debug" },
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Indicator settings. The orientation is the first one shown; the
    /// demo renders all four.
    #[serde(default)]
    pub indicator: StepConfig,

    /// Display bounds the indicator must fit into, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}
