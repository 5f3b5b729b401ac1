//! Run the publish gate and quality heuristics against the optimized prompt.

use clap::Parser;
use promptops::commands::CheckCommand;
use promptops::output;
use promptops_core::{config::AppConfig, logging, AppResult};
use std::process::ExitCode;

/// Check the optimized prompt locally without contacting the hub
#[derive(Parser, Debug)]
#[command(name = "check-prompts", version)]
struct Cli {}

fn run() -> AppResult<()> {
    let config = AppConfig::load()?;
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    CheckCommand::default().execute(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    output::finish(
        "Check",
        run(),
        &["Next step: publish with push-prompts".to_string()],
    )
}
