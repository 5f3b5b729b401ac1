//! Pull workflow.
//!
//! Fetches the baseline prompt from the hub and writes it to a local record
//! file for manual editing.

use crate::output::section_header;
use promptops_core::{AppConfig, AppResult, Setting};
use promptops_hub::{HubClient, PromptRef, PulledPrompt};
use promptops_prompt::{extract_prompts, save_records, PromptFile, PromptRecord, DEFAULT_USER_PROMPT};
use std::path::PathBuf;

/// Hub owner of the baseline prompt.
pub const DEFAULT_OWNER: &str = "leonanluppi";

/// Workspace-relative output file.
pub const DEFAULT_OUTPUT: &str = "prompts/bug_to_user_story_v1.yml";

/// Record name written into the output file; also the hub repo name.
pub const DEFAULT_RECORD_KEY: &str = "bug_to_user_story_v1";

const DESCRIPTION: &str =
    "Initial prompt for converting bug reports into user stories (low quality)";
const VERSION: &str = "v1";
const TAGS: &[&str] = &["bug-analysis", "user-story", "product-management"];

/// Settings the pull workflow cannot run without.
pub const REQUIRED_SETTINGS: &[Setting] = &[Setting::ApiKey];

/// Pull the baseline prompt into the workspace.
#[derive(Debug, Clone)]
pub struct PullCommand {
    pub source: PromptRef,
    /// Output file, relative to the workspace
    pub output: PathBuf,
    pub record_key: String,
}

impl Default for PullCommand {
    fn default() -> Self {
        Self {
            source: PromptRef::new(DEFAULT_OWNER, DEFAULT_RECORD_KEY),
            output: PathBuf::from(DEFAULT_OUTPUT),
            record_key: DEFAULT_RECORD_KEY.to_string(),
        }
    }
}

impl PullCommand {
    /// Execute the pull workflow.
    ///
    /// Returns the path of the written record file.
    pub async fn execute(&self, config: &AppConfig, client: &dyn HubClient) -> AppResult<PathBuf> {
        section_header("PULL PROMPT FROM LANGSMITH HUB");
        config.require(REQUIRED_SETTINGS)?;

        println!("Pulling: {}", self.source);
        let pulled = client.pull(&self.source).await?;
        tracing::debug!("Pulled commit {} via {}", pulled.commit_hash, client.provider_name());

        let record = record_from_pull(&pulled, &self.source);
        println!("✓ Prompt extracted");
        println!("  - System prompt: {} characters", record.system_text().chars().count());
        println!("  - User prompt:   {} characters", record.user_text().chars().count());

        let mut file = PromptFile::new();
        file.insert(self.record_key.clone(), record);

        let path = config.resolve(&self.output);
        save_records(&path, &file)?;
        println!("✓ File saved to: {}", self.output.display());

        Ok(path)
    }
}

/// Turn a pulled prompt into a local record.
///
/// When no system or human message text can be found, the whole manifest is
/// kept as the system prompt so nothing is lost.
pub fn record_from_pull(pulled: &PulledPrompt, source: &PromptRef) -> PromptRecord {
    let (system, user) = match extract_prompts(&pulled.template()) {
        Some(extracted) => (extracted.system, extracted.user),
        None => {
            tracing::warn!("No structured messages in {}; keeping raw manifest", source);
            println!("⚠️  Could not extract structured messages; using raw format");
            (pulled.raw(), String::new())
        }
    };

    let user = if user.is_empty() {
        DEFAULT_USER_PROMPT.to_string()
    } else {
        user
    };

    PromptRecord {
        description: Some(DESCRIPTION.to_string()),
        source: Some(source.to_string()),
        system_prompt: Some(system),
        user_prompt: Some(user),
        version: Some(VERSION.to_string()),
        tags: TAGS.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}
