//! Pull the baseline prompt from the LangSmith Hub into `prompts/`.

use clap::Parser;
use promptops::commands::PullCommand;
use promptops::output;
use promptops_core::{config::AppConfig, logging, AppResult};
use promptops_hub::create_client;
use std::process::ExitCode;

/// Pull the baseline bug-to-user-story prompt from the LangSmith Hub
#[derive(Parser, Debug)]
#[command(name = "pull-prompts", version)]
struct Cli {}

async fn run() -> AppResult<()> {
    let config = AppConfig::load()?;
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    let client = create_client(&config)?;

    PullCommand::default()
        .execute(&config, client.as_ref())
        .await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    let command = PullCommand::default();
    output::finish(
        "Pull",
        run().await,
        &[
            format!("Next step: review the prompt in '{}'", command.output.display()),
            "and write your optimized version in 'prompts/bug_to_user_story_v2.yml'".to_string(),
        ],
    )
}
