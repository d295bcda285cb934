//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ua_analyzer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ua_analyzer::config::{Cli, Command};
use ua_analyzer::initialization::init_logger_with;
use ua_analyzer::{analyze, run_analysis};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let result = match cli.command {
        Command::Analyze(cmd) => {
            let config = cmd.into_config(cli.log_level, cli.log_format);
            run_analysis(&config).await
        }
        Command::Classify(cmd) => serde_json::to_string_pretty(&analyze(&cmd.user_agent))
            .context("Failed to render classification"),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("ua_analyzer error: {:#}", e);
            process::exit(1);
        }
    }
}
