//! StepView demo Iced application.

use iced::widget::{Column, button, column, container, row, text};
use iced::{Alignment, Element, Length, Task, Theme};

use stepview_common::{ConfigError, Orientation};

use crate::config::DemoConfig;
use crate::message::Message;
use crate::widget::{StepViewState, step_view};

/// One indicator shown by the demo.
#[derive(Debug)]
pub struct Panel {
    pub orientation: Orientation,
    pub state: StepViewState,
}

/// The demo application: the same indicator in all four orientations,
/// driven by shared Previous/Next/Reset controls.
#[derive(Debug)]
pub struct StepViewDemo {
    panels: Vec<Panel>,
    /// Step the indicators start at (restored by Reset).
    initial_step: i32,
    current_step: i32,
    total_steps: u32,
    /// Last validation error (if any).
    last_error: Option<String>,
}

impl StepViewDemo {
    /// Build the demo, failing if the indicator configuration is invalid.
    ///
    /// The configured orientation is shown first, followed by the others.
    pub fn new(config: &DemoConfig) -> Result<Self, ConfigError> {
        let first = config.indicator.orientation;
        let orientations = std::iter::once(first).chain(
            Orientation::all()
                .iter()
                .copied()
                .filter(move |&o| o != first),
        );

        let mut panels = Vec::with_capacity(Orientation::all().len());
        for orientation in orientations {
            let indicator_config = config.indicator.clone().with_orientation(orientation);
            let state = StepViewState::configure(indicator_config, config.viewport)?;
            panels.push(Panel { orientation, state });
        }

        let total_steps = panels
            .first()
            .map(|p| p.state.indicator().total_steps())
            .unwrap_or_default();

        Ok(Self {
            panels,
            initial_step: config.indicator.current_step,
            current_step: config.indicator.current_step,
            total_steps,
            last_error: None,
        })
    }

    /// Boot the demo (called by iced::application).
    ///
    /// An invalid configuration leaves the demo without indicators and
    /// shows the error instead.
    pub fn boot(config: &DemoConfig) -> (Self, Task<Message>) {
        let app = Self::new(config).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Invalid indicator configuration");
            Self {
                panels: Vec::new(),
                initial_step: 1,
                current_step: 1,
                total_steps: 0,
                last_error: Some(e.to_string()),
            }
        });

        (app, Task::none())
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn current_step(&self) -> i32 {
        self.current_step
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Next => {
                let total = i32::try_from(self.total_steps).unwrap_or(i32::MAX);
                if self.current_step < total {
                    self.set_step(self.current_step + 1);
                }
            }

            Message::Previous => {
                self.set_step((self.current_step - 1).max(1));
            }

            Message::Reset => {
                self.set_step(self.initial_step);
            }
        }

        Task::none()
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("StepView").size(24),
            text(format!("Step {} of {}", self.current_step, self.total_steps)).size(14),
        ]
        .spacing(20)
        .align_y(Alignment::Center);

        let controls = row![
            button(text("Previous")).on_press(Message::Previous),
            button(text("Next")).on_press(Message::Next),
            button(text("Reset")).on_press(Message::Reset),
        ]
        .spacing(10);

        let mut content = Column::new().push(header).push(controls).spacing(20);

        if let Some(ref error) = self.last_error {
            content = content.push(text(error.as_str()).size(12).style(|t: &Theme| text::Style {
                color: Some(t.extended_palette().danger.base.color),
            }));
        }

        let panels = self.panels.iter().fold(row![].spacing(30), |panels, panel| {
            panels.push(
                column![
                    text(panel.orientation.label()).size(12),
                    step_view(&panel.state)
                ]
                .spacing(8),
            )
        });

        container(content.push(panels))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    fn set_step(&mut self, step: i32) {
        for panel in &mut self.panels {
            if let Err(e) = panel.state.set_current_step(step) {
                self.last_error = Some(e.to_string());
                return;
            }
        }

        self.current_step = step;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepview_common::StepConfig;

    fn demo(current_step: i32) -> StepViewDemo {
        let config = DemoConfig {
            indicator: StepConfig::default().with_current_step(current_step),
            ..Default::default()
        };
        StepViewDemo::new(&config).unwrap()
    }

    #[test]
    fn test_all_orientations_shown_configured_first() {
        let config = DemoConfig {
            indicator: StepConfig::default().with_orientation(Orientation::VerticalBottomToTop),
            ..Default::default()
        };
        let demo = StepViewDemo::new(&config).unwrap();

        let orientations: Vec<_> = demo.panels().iter().map(|p| p.orientation).collect();
        assert_eq!(
            orientations,
            vec![
                Orientation::VerticalBottomToTop,
                Orientation::HorizontalLeftToRight,
                Orientation::VerticalTopToBottom,
                Orientation::HorizontalRightToLeft,
            ]
        );
    }

    #[test]
    fn test_next_stops_at_total() {
        let mut demo = demo(6);

        let _ = demo.update(Message::Next);
        assert_eq!(demo.current_step(), 7);

        let _ = demo.update(Message::Next);
        assert_eq!(demo.current_step(), 7);
        assert!(demo.panels().iter().all(|p| p.state.current_step() == 7));
    }

    #[test]
    fn test_previous_never_below_one() {
        let mut demo = demo(2);

        let _ = demo.update(Message::Previous);
        let _ = demo.update(Message::Previous);

        assert_eq!(demo.current_step(), 1);
        assert!(demo.last_error().is_none());
    }

    #[test]
    fn test_reset_restores_initial_step() {
        let mut demo = demo(3);

        let _ = demo.update(Message::Next);
        let _ = demo.update(Message::Next);
        assert_eq!(demo.current_step(), 5);

        let _ = demo.update(Message::Reset);
        assert_eq!(demo.current_step(), 3);
    }

    #[test]
    fn test_boot_with_invalid_config_shows_error() {
        let config = DemoConfig {
            indicator: StepConfig::default().with_total_steps(8),
            ..Default::default()
        };

        let (demo, _) = StepViewDemo::boot(&config);

        assert!(demo.panels().is_empty());
        assert!(demo.last_error().is_some_and(|e| e.contains("odd")));
    }
}
