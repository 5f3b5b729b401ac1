//! Validate `prompts/bug_to_user_story_v2.yml` and publish it to the LangSmith Hub.

use clap::Parser;
use promptops::commands::PushCommand;
use promptops::output;
use promptops_core::{config::AppConfig, logging, AppResult};
use promptops_hub::create_client;
use std::process::ExitCode;

/// Validate the optimized prompt and publish it publicly to the LangSmith Hub
#[derive(Parser, Debug)]
#[command(name = "push-prompts", version)]
struct Cli {}

async fn run() -> AppResult<()> {
    let config = AppConfig::load()?;
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    let client = create_client(&config)?;

    PushCommand::default()
        .execute(&config, client.as_ref())
        .await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    output::finish(
        "Push",
        run().await,
        &["Next step: evaluate the published prompt on the LangSmith Hub".to_string()],
    )
}
