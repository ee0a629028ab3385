//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the StepView demo.
#[derive(Parser, Debug, Clone)]
#[command(name = "stepview", about = "Step progress indicator demo")]
pub struct DemoArgs {
    /// Path to a JSON5 configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = DemoArgs::parse_from([
            "stepview",
            "--config",
            "demo.json5",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("demo.json5")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(!args.print_config);
    }

    #[test]
    fn test_args_defaults() {
        let args = DemoArgs::parse_from(["stepview"]);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }
}
