//! The step indicator: validated configuration, progress state and
//! draw-command generation.

use crate::color::Rgba;
use crate::config::{Axis, Direction, StepConfig, Viewport};
use crate::error::ConfigError;
use crate::geometry::{self, Extent, Metrics, Point, Primitive, StepStatus};

/// Drawing primitives supplied by the host renderer.
///
/// Coordinates share the indicator's space, with the origin at its top-left.
pub trait DrawSurface {
    /// Draw a filled circle.
    fn draw_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Draw a straight line with the given stroke width.
    fn draw_line(&mut self, start: Point, end: Point, thickness: f32, color: Rgba);
}

/// A configured step indicator.
///
/// Only a configuration that passes validation produces an indicator, so
/// every value of this type is renderable.
#[derive(Debug, Clone)]
pub struct StepIndicator {
    config: StepConfig,
    total_steps: u32,
    current_step: u32,
    extent: Extent,
    /// Cached shapes, index `step - 1`.
    layout: Vec<Primitive>,
    redraw_requested: bool,
}

impl StepIndicator {
    /// Validate `config` and build an indicator without a viewport check.
    pub fn configure(config: StepConfig) -> Result<Self, ConfigError> {
        Self::configure_within(config, None)
    }

    /// Validate `config` and build an indicator.
    ///
    /// When `viewport` is given, the indicator must fit inside it along its
    /// axis in both display dimensions.
    pub fn configure_within(
        config: StepConfig,
        viewport: Option<Viewport>,
    ) -> Result<Self, ConfigError> {
        let (total_steps, current_step) = validate(&config).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected step indicator configuration");
        })?;

        let metrics = metrics(&config);
        let extent = geometry::extent(total_steps, &metrics);

        if let Some(viewport) = viewport {
            if extent.along > viewport.width || extent.along > viewport.height {
                let error = ConfigError::ExceedsViewport {
                    extent: extent.along,
                    width: viewport.width,
                    height: viewport.height,
                };
                tracing::warn!(error = %error, "Rejected step indicator configuration");
                return Err(error);
            }
        }

        let axis = config.axis();
        let layout = (1..=total_steps)
            .map(|step| geometry::place(step, axis, &metrics))
            .collect();

        tracing::debug!(
            total_steps,
            current_step,
            orientation = ?config.orientation,
            along = extent.along,
            across = extent.across,
            "Configured step indicator"
        );

        Ok(Self {
            config,
            total_steps,
            current_step,
            extent,
            layout,
            redraw_requested: true,
        })
    }

    /// Replace the configuration, keeping the current state if it is invalid.
    pub fn reconfigure(
        &mut self,
        config: StepConfig,
        viewport: Option<Viewport>,
    ) -> Result<(), ConfigError> {
        *self = Self::configure_within(config, viewport)?;
        Ok(())
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn axis(&self) -> Axis {
        self.config.axis()
    }

    pub fn direction(&self) -> Direction {
        self.config.direction()
    }

    /// Space required along and across the axis.
    pub fn measure(&self) -> Extent {
        self.extent
    }

    /// Shape for `step`, or `None` outside `1..=total_steps`.
    pub fn primitive_for(&self, step: u32) -> Option<Primitive> {
        let index = step.checked_sub(1)?;
        self.layout.get(index as usize).copied()
    }

    /// Whether `step` falls inside the completed portion.
    pub fn is_completed(&self, step: u32) -> bool {
        is_completed(self.direction(), self.total_steps, step, self.current_step)
    }

    pub fn status(&self, step: u32) -> StepStatus {
        if self.is_completed(step) {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }

    /// Every step with its shape and paint state, in step order.
    pub fn primitives(&self) -> impl Iterator<Item = (u32, Primitive, StepStatus)> + '_ {
        (1..=self.total_steps).zip(self.layout.iter()).map(|(step, primitive)| {
            (step, *primitive, self.status(step))
        })
    }

    /// Color used for a given paint state.
    pub fn color_for(&self, status: StepStatus) -> Rgba {
        match status {
            StepStatus::Completed => self.config.completed_color,
            StepStatus::Pending => self.config.pending_color,
        }
    }

    /// Issue draw calls for every step and clear any pending redraw request.
    pub fn render(&mut self, surface: &mut impl DrawSurface) {
        self.draw(surface);
        self.redraw_requested = false;
    }

    /// Issue draw calls for every step.
    pub fn draw(&self, surface: &mut impl DrawSurface) {
        for (_, primitive, status) in self.primitives() {
            let color = self.color_for(status);
            match primitive {
                Primitive::Circle { center, radius } => {
                    surface.draw_circle(center, radius, color);
                }
                Primitive::Segment {
                    start,
                    end,
                    thickness,
                } => {
                    surface.draw_line(start, end, thickness, color);
                }
            }
        }
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Update progress. Values above the step count are kept as-is and
    /// render every step as completed.
    pub fn set_current_step(&mut self, step: i32) -> Result<(), ConfigError> {
        let step = validate_current_step(step).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected current step");
        })?;

        if step != self.current_step {
            tracing::debug!(from = self.current_step, to = step, "Current step changed");
        }

        self.current_step = step;
        self.redraw_requested = true;
        Ok(())
    }

    /// Returns true once after a change that requires a redraw.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

/// Classification rule shared by all indicators.
///
/// Forward counts completed steps from the first step; Reversed counts
/// them from the last.
pub fn is_completed(direction: Direction, total_steps: u32, step: u32, current_step: u32) -> bool {
    match direction {
        Direction::Forward => step <= current_step,
        Direction::Reversed => i64::from(total_steps) - i64::from(step) < i64::from(current_step),
    }
}

fn metrics(config: &StepConfig) -> Metrics {
    Metrics {
        circle_radius: config.circle_radius,
        line_length: config.line_length,
        line_thickness: config.line_thickness,
        circle_line_spacing: config.circle_line_spacing,
    }
}

fn validate(config: &StepConfig) -> Result<(u32, u32), ConfigError> {
    if config.total_steps < 1 || config.total_steps % 2 == 0 {
        return Err(ConfigError::InvalidStepCount {
            total_steps: config.total_steps,
        });
    }

    let current_step = validate_current_step(config.current_step)?;

    validate_length("circle_radius", config.circle_radius, false)?;
    validate_length("line_length", config.line_length, false)?;
    validate_length("circle_line_spacing", config.circle_line_spacing, true)?;

    let diameter = config.circle_radius * 2.0;
    if !(config.line_thickness > 0.0 && config.line_thickness <= diameter) {
        return Err(ConfigError::IncompatibleLineThickness {
            thickness: config.line_thickness,
            diameter,
        });
    }

    Ok((config.total_steps as u32, current_step))
}

/// Lengths must be finite and positive, or non-negative when `allow_zero`.
fn validate_length(name: &'static str, value: f32, allow_zero: bool) -> Result<(), ConfigError> {
    let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if value.is_finite() && in_range {
        Ok(())
    } else {
        Err(ConfigError::InvalidLength { name, value })
    }
}

fn validate_current_step(step: i32) -> Result<u32, ConfigError> {
    u32::try_from(step)
        .ok()
        .filter(|&s| s >= 1)
        .ok_or(ConfigError::InvalidCurrentStep { step })
}
