use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Primary direction along which steps are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Whether completion is counted from the first step or the last one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Reversed,
}

/// The four visual orientations, combining [`Axis`] and [`Direction`].
///
/// Accepts either the snake_case name or the integer code used by markup
/// attributes (0 - 3) when deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "OrientationRepr")]
pub enum Orientation {
    #[default]
    HorizontalLeftToRight,
    VerticalTopToBottom,
    HorizontalRightToLeft,
    VerticalBottomToTop,
}

impl Orientation {
    /// Build an orientation from its axis and traversal direction.
    pub fn from_parts(axis: Axis, direction: Direction) -> Self {
        match (axis, direction) {
            (Axis::Horizontal, Direction::Forward) => Orientation::HorizontalLeftToRight,
            (Axis::Vertical, Direction::Forward) => Orientation::VerticalTopToBottom,
            (Axis::Horizontal, Direction::Reversed) => Orientation::HorizontalRightToLeft,
            (Axis::Vertical, Direction::Reversed) => Orientation::VerticalBottomToTop,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Orientation::HorizontalLeftToRight | Orientation::HorizontalRightToLeft => {
                Axis::Horizontal
            }
            Orientation::VerticalTopToBottom | Orientation::VerticalBottomToTop => Axis::Vertical,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Orientation::HorizontalLeftToRight | Orientation::VerticalTopToBottom => {
                Direction::Forward
            }
            Orientation::HorizontalRightToLeft | Orientation::VerticalBottomToTop => {
                Direction::Reversed
            }
        }
    }

    /// Integer code used by markup attributes.
    pub fn code(self) -> i32 {
        match self {
            Orientation::HorizontalLeftToRight => 0,
            Orientation::VerticalTopToBottom => 1,
            Orientation::HorizontalRightToLeft => 2,
            Orientation::VerticalBottomToTop => 3,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::HorizontalLeftToRight => "Left to right",
            Orientation::VerticalTopToBottom => "Top to bottom",
            Orientation::HorizontalRightToLeft => "Right to left",
            Orientation::VerticalBottomToTop => "Bottom to top",
        }
    }

    /// All orientations, in code order.
    pub fn all() -> &'static [Orientation] {
        &[
            Orientation::HorizontalLeftToRight,
            Orientation::VerticalTopToBottom,
            Orientation::HorizontalRightToLeft,
            Orientation::VerticalBottomToTop,
        ]
    }
}

impl TryFrom<i32> for Orientation {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Orientation::all()
            .iter()
            .copied()
            .find(|o| o.code() == code)
            .ok_or_else(|| Error::Config(format!("Unknown orientation code: {}", code)))
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal_left_to_right" => Ok(Orientation::HorizontalLeftToRight),
            "vertical_top_to_bottom" => Ok(Orientation::VerticalTopToBottom),
            "horizontal_right_to_left" => Ok(Orientation::HorizontalRightToLeft),
            "vertical_bottom_to_top" => Ok(Orientation::VerticalBottomToTop),
            other => Err(Error::Config(format!("Unknown orientation: {}", other))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrientationRepr {
    Code(i32),
    Name(String),
}

impl TryFrom<OrientationRepr> for Orientation {
    type Error = Error;

    fn try_from(repr: OrientationRepr) -> Result<Self> {
        match repr {
            OrientationRepr::Code(code) => Orientation::try_from(code),
            OrientationRepr::Name(name) => name.parse(),
        }
    }
}

/// Configuration for a step indicator.
///
/// Lengths are logical pixels. Validation happens when the configuration
/// is handed to [`StepIndicator::configure`](crate::StepIndicator::configure),
/// so a deserialized value may still be rejected there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    /// Number of steps (circles and connecting lines). Must be odd.
    #[serde(default = "default_total_steps")]
    pub total_steps: i32,

    /// Initial progress, counted along the traversal direction.
    #[serde(default = "default_current_step")]
    pub current_step: i32,

    #[serde(default = "default_circle_radius")]
    pub circle_radius: f32,

    /// Length of each connecting line.
    #[serde(default = "default_line_length")]
    pub line_length: f32,

    /// Stroke width of each connecting line.
    #[serde(default = "default_line_thickness")]
    pub line_thickness: f32,

    /// Gap between a circle and each adjacent line.
    #[serde(default = "default_circle_line_spacing")]
    pub circle_line_spacing: f32,

    #[serde(default)]
    pub orientation: Orientation,

    #[serde(default = "default_completed_color")]
    pub completed_color: Rgba,

    #[serde(default = "default_pending_color")]
    pub pending_color: Rgba,
}

fn default_total_steps() -> i32 {
    7
}

fn default_current_step() -> i32 {
    1
}

fn default_circle_radius() -> f32 {
    5.0
}

fn default_line_length() -> f32 {
    30.0
}

fn default_line_thickness() -> f32 {
    1.0
}

fn default_circle_line_spacing() -> f32 {
    10.0
}

fn default_completed_color() -> Rgba {
    Rgba::rgb(0xD9, 0x54, 0x54)
}

fn default_pending_color() -> Rgba {
    Rgba::argb(0x19, 0x00, 0x00, 0x00)
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            total_steps: default_total_steps(),
            current_step: default_current_step(),
            circle_radius: default_circle_radius(),
            line_length: default_line_length(),
            line_thickness: default_line_thickness(),
            circle_line_spacing: default_circle_line_spacing(),
            orientation: Orientation::default(),
            completed_color: default_completed_color(),
            pending_color: default_pending_color(),
        }
    }
}

impl StepConfig {
    pub fn axis(&self) -> Axis {
        self.orientation.axis()
    }

    pub fn direction(&self) -> Direction {
        self.orientation.direction()
    }

    /// Set the number of steps.
    pub fn with_total_steps(mut self, total_steps: i32) -> Self {
        self.total_steps = total_steps;
        self
    }

    /// Set the initial current step.
    pub fn with_current_step(mut self, current_step: i32) -> Self {
        self.current_step = current_step;
        self
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the circle radius and line thickness.
    pub fn with_sizes(mut self, circle_radius: f32, line_thickness: f32) -> Self {
        self.circle_radius = circle_radius;
        self.line_thickness = line_thickness;
        self
    }

    /// Set the line length and circle/line spacing.
    pub fn with_spacing(mut self, line_length: f32, circle_line_spacing: f32) -> Self {
        self.line_length = line_length;
        self.circle_line_spacing = circle_line_spacing;
        self
    }

    /// Set the completed and pending colors.
    pub fn with_colors(mut self, completed: Rgba, pending: Rgba) -> Self {
        self.completed_color = completed;
        self.pending_color = pending;
        self
    }

    /// Convert density-independent lengths to device pixels.
    ///
    /// Each length becomes `value * factor` rounded half-up to a whole pixel.
    pub fn scaled(mut self, factor: f32) -> Self {
        let px = |value: f32| (value * factor + 0.5).trunc();
        self.circle_radius = px(self.circle_radius);
        self.line_length = px(self.line_length);
        self.line_thickness = px(self.line_thickness);
        self.circle_line_spacing = px(self.circle_line_spacing);
        self
    }
}

/// Display bounds the indicator must fit into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Common logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: StepConfig = parse_config("{}").unwrap();

        assert_eq!(config, StepConfig::default());
        assert_eq!(config.total_steps, 7);
        assert_eq!(config.current_step, 1);
        assert_eq!(config.circle_radius, 5.0);
        assert_eq!(config.line_length, 30.0);
        assert_eq!(config.line_thickness, 1.0);
        assert_eq!(config.circle_line_spacing, 10.0);
        assert_eq!(config.axis(), Axis::Horizontal);
        assert_eq!(config.direction(), Direction::Forward);
        assert_eq!(config.completed_color.to_string(), "#FFD95454");
        assert_eq!(config.pending_color.to_string(), "#19000000");
    }

    #[test]
    fn test_parse_step_config() {
        let json5 = r##"
        {
            total_steps: 5,
            current_step: 2,
            circle_radius: 8,
            line_length: 40.5,
            orientation: "vertical_bottom_to_top",
            completed_color: "#00FF00",
            pending_color: "#80FF0000",
        }
        "##;

        let config: StepConfig = parse_config(json5).unwrap();

        assert_eq!(config.total_steps, 5);
        assert_eq!(config.current_step, 2);
        assert_eq!(config.circle_radius, 8.0);
        assert_eq!(config.line_length, 40.5);
        assert_eq!(config.line_thickness, 1.0);
        assert_eq!(config.axis(), Axis::Vertical);
        assert_eq!(config.direction(), Direction::Reversed);
        assert_eq!(config.completed_color, Rgba::rgb(0, 0xFF, 0));
        assert_eq!(config.pending_color, Rgba::argb(0x80, 0xFF, 0, 0));
    }

    #[test]
    fn test_orientation_integer_codes() {
        let config: StepConfig = parse_config("{ orientation: 2 }").unwrap();
        assert_eq!(config.orientation, Orientation::HorizontalRightToLeft);

        assert!(parse_config::<StepConfig>("{ orientation: 4 }").is_err());
        assert!(parse_config::<StepConfig>(r#"{ orientation: "diagonal" }"#).is_err());
    }

    #[test]
    fn test_orientation_parts_roundtrip() {
        for &orientation in Orientation::all() {
            assert_eq!(
                Orientation::from_parts(orientation.axis(), orientation.direction()),
                orientation
            );
            assert_eq!(Orientation::try_from(orientation.code()).unwrap(), orientation);
        }
    }

    #[test]
    fn test_invalid_color_rejected() {
        assert!(parse_config::<StepConfig>(r#"{ completed_color: "red" }"#).is_err());
    }

    #[test]
    fn test_scaled_rounds_half_up() {
        let config = StepConfig::default().scaled(2.75);

        // 5 * 2.75 = 13.75, 30 * 2.75 = 82.5, 1 * 2.75 = 2.75, 10 * 2.75 = 27.5
        assert_eq!(config.circle_radius, 14.0);
        assert_eq!(config.line_length, 83.0);
        assert_eq!(config.line_thickness, 3.0);
        assert_eq!(config.circle_line_spacing, 28.0);
        assert_eq!(config.total_steps, 7);
    }

    #[test]
    fn test_json_logging_format() {
        let json5 = r#"
        {
            level: "debug",
            format: "json",
        }
        "#;

        let config: LoggingConfig = parse_config(json5).unwrap();

        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config::<StepConfig>("/nonexistent/stepview.json5");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
