//! Canvas-based step indicator widget.

use iced::mouse;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{Color, Element, Length, Rectangle, Renderer, Theme};

use stepview_common::{
    ConfigError, DrawSurface, Point, Rgba, StepConfig, StepIndicator, Viewport,
};

/// State for one step indicator on screen.
#[derive(Debug)]
pub struct StepViewState {
    indicator: StepIndicator,
    /// Cache for the indicator geometry.
    cache: Cache,
}

impl StepViewState {
    /// Wrap an already configured indicator.
    pub fn new(indicator: StepIndicator) -> Self {
        Self {
            indicator,
            cache: Cache::new(),
        }
    }

    /// Validate `config` and create the widget state.
    pub fn configure(config: StepConfig, viewport: Option<Viewport>) -> Result<Self, ConfigError> {
        StepIndicator::configure_within(config, viewport).map(Self::new)
    }

    pub fn indicator(&self) -> &StepIndicator {
        &self.indicator
    }

    pub fn current_step(&self) -> u32 {
        self.indicator.current_step()
    }

    /// Width and height the canvas is laid out at.
    pub fn canvas_size(&self) -> iced::Size {
        let size = self.indicator.measure().size(self.indicator.axis());
        iced::Size::new(size.width, size.height)
    }

    /// Update progress and invalidate the cached drawing.
    pub fn set_current_step(&mut self, step: i32) -> Result<(), ConfigError> {
        self.indicator.set_current_step(step)?;
        if self.indicator.take_redraw_request() {
            self.cache.clear();
        }
        Ok(())
    }

    /// Replace the configuration. The previous one stays active on error.
    pub fn reconfigure(
        &mut self,
        config: StepConfig,
        viewport: Option<Viewport>,
    ) -> Result<(), ConfigError> {
        self.indicator.reconfigure(config, viewport)?;
        self.cache.clear();
        Ok(())
    }
}

/// Render a step indicator at its measured size.
pub fn step_view<'a, Message: 'a>(state: &'a StepViewState) -> Element<'a, Message> {
    let size = state.canvas_size();

    Canvas::new(StepViewProgram { state })
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .into()
}

/// Canvas program drawing a step indicator.
struct StepViewProgram<'a> {
    state: &'a StepViewState,
}

impl<Message> canvas::Program<Message> for StepViewProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.state.cache.draw(renderer, bounds.size(), |frame| {
            self.state.indicator.draw(&mut FrameSurface { frame });
        });

        vec![geometry]
    }
}

/// Adapts an Iced frame to the indicator's drawing interface.
struct FrameSurface<'a> {
    frame: &'a mut Frame,
}

impl DrawSurface for FrameSurface<'_> {
    fn draw_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        let circle = Path::circle(to_point(center), radius);
        self.frame.fill(&circle, to_color(color));
    }

    fn draw_line(&mut self, start: Point, end: Point, thickness: f32, color: Rgba) {
        let line = Path::line(to_point(start), to_point(end));
        self.frame.stroke(
            &line,
            Stroke::default()
                .with_color(to_color(color))
                .with_width(thickness),
        );
    }
}

fn to_point(point: Point) -> iced::Point {
    iced::Point::new(point.x, point.y)
}

/// Convert an indicator color to an Iced color.
pub fn to_color(color: Rgba) -> Color {
    let [r, g, b, a] = color.to_f32_array();
    Color::from_rgba(r, g, b, a)
}
