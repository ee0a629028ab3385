//! UI tests using iced_test Simulator.
//!
//! These tests verify the demo behavior without opening a window.

use iced_test::simulator;

use stepview::config::DemoConfig;
use stepview::message::Message;
use stepview::StepViewDemo;
use stepview_common::StepConfig;

fn demo() -> StepViewDemo {
    StepViewDemo::new(&DemoConfig::default()).unwrap()
}

/// Test that the demo renders the header and step label.
#[test]
fn test_demo_header() {
    let demo = demo();
    let mut ui = simulator(demo.view());

    assert!(ui.find("StepView").is_ok());
    assert!(ui.find("Step 1 of 7").is_ok());
}

/// Test that every orientation gets a labelled indicator.
#[test]
fn test_demo_orientation_labels() {
    let demo = demo();
    let mut ui = simulator(demo.view());

    assert!(ui.find("Left to right").is_ok());
    assert!(ui.find("Top to bottom").is_ok());
    assert!(ui.find("Right to left").is_ok());
    assert!(ui.find("Bottom to top").is_ok());
}

/// Test clicking the Next button.
#[test]
fn test_next_button() {
    let demo = demo();
    let mut ui = simulator(demo.view());

    let _ = ui.click("Next");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.iter().any(|m| matches!(m, Message::Next)));
}

/// Test clicking the Previous button.
#[test]
fn test_previous_button() {
    let demo = demo();
    let mut ui = simulator(demo.view());

    let _ = ui.click("Previous");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.iter().any(|m| matches!(m, Message::Previous)));
}

/// Test clicking the Reset button.
#[test]
fn test_reset_button() {
    let demo = demo();
    let mut ui = simulator(demo.view());

    let _ = ui.click("Reset");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.iter().any(|m| matches!(m, Message::Reset)));
}

/// Test that the label follows updates.
#[test]
fn test_label_after_next() {
    let mut demo = demo();
    let _ = demo.update(Message::Next);
    let _ = demo.update(Message::Next);

    let mut ui = simulator(demo.view());
    assert!(ui.find("Step 3 of 7").is_ok());
}

/// Test that an invalid configuration shows the error instead of indicators.
#[test]
fn test_invalid_config_shows_error() {
    let config = DemoConfig {
        indicator: StepConfig::default().with_sizes(5.0, 11.0),
        ..Default::default()
    };
    let (demo, _) = StepViewDemo::boot(&config);

    let mut ui = simulator(demo.view());
    assert!(ui.find("Line thickness 11 exceeds circle diameter 10").is_ok());
    assert!(ui.find("Left to right").is_err());
}
