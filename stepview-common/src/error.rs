use thiserror::Error;

/// Validation failures raised while configuring or updating a step indicator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The step count is even or not positive.
    #[error("Step count must be an odd number of at least 1, got {total_steps}")]
    InvalidStepCount { total_steps: i32 },

    /// The current step is below 1.
    #[error("Current step must be at least 1, got {step}")]
    InvalidCurrentStep { step: i32 },

    /// A connecting line would be thicker than the circles it joins.
    #[error("Line thickness {thickness} exceeds circle diameter {diameter}")]
    IncompatibleLineThickness { thickness: f32, diameter: f32 },

    /// A size is not finite, or is out of range (radius and line length
    /// must be positive, spacing non-negative).
    #[error("Invalid {name}: {value}")]
    InvalidLength { name: &'static str, value: f32 },

    /// The indicator does not fit inside the host display bounds.
    #[error("Indicator extent {extent} exceeds viewport {width}x{height}")]
    ExceedsViewport { extent: f32, width: f32, height: f32 },
}

/// Common error type for StepView components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid indicator configuration: {0}")]
    Indicator(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using StepView's Error.
pub type Result<T> = std::result::Result<T, Error>;
