//! StepView - step progress indicator widget for Iced.
//!
//! This library exposes the widget and the demo application components.

pub mod app;
pub mod args;
pub mod config;
pub mod message;
pub mod widget;

// Re-export commonly used types
pub use app::StepViewDemo;
pub use message::Message;
pub use widget::{StepViewState, step_view};
