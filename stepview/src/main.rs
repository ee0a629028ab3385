//! StepView - step progress indicator demo.
//!
//! Shows one indicator in all four orientations, with buttons to move the
//! current step back and forth.

use clap::Parser;
use iced::application;

use stepview::StepViewDemo;
use stepview::args::DemoArgs;
use stepview::config::DemoConfig;
use stepview_common::{StepIndicator, init_tracing, load_config};

fn main() -> anyhow::Result<()> {
    let args = DemoArgs::parse();

    let mut config: DemoConfig = match &args.config {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };

    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    init_tracing(&config.logging)?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // Fail fast on an invalid indicator before opening a window
    StepIndicator::configure_within(config.indicator.clone(), config.viewport)?;

    tracing::info!(
        total_steps = config.indicator.total_steps,
        current_step = config.indicator.current_step,
        "Starting StepView demo"
    );

    application(
        move || StepViewDemo::boot(&config),
        StepViewDemo::update,
        StepViewDemo::view,
    )
    .title("StepView")
    .theme(StepViewDemo::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
