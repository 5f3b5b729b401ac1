//! Push workflow.
//!
//! Loads the locally edited prompt, runs the validation gate and publishes
//! the resulting chat template under the configured username.

use crate::output::section_header;
use promptops_core::{AppConfig, AppError, AppResult, Setting};
use promptops_hub::{HubClient, PromptRef, PushReceipt, PushRequest};
use promptops_prompt::{build_template, load_record, validate};
use std::path::PathBuf;

/// Workspace-relative input file.
pub const DEFAULT_INPUT: &str = "prompts/bug_to_user_story_v2.yml";

/// Record name read from the input file and used as the hub repo name.
pub const DEFAULT_RECORD_KEY: &str = "bug_to_user_story_v2";

/// Settings the push workflow cannot run without.
pub const REQUIRED_SETTINGS: &[Setting] = &[Setting::ApiKey, Setting::Username];

/// Validate and publish the optimized prompt.
#[derive(Debug, Clone)]
pub struct PushCommand {
    /// Input file, relative to the workspace
    pub input: PathBuf,
    pub record_key: String,
    pub is_public: bool,
}

impl Default for PushCommand {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            record_key: DEFAULT_RECORD_KEY.to_string(),
            is_public: true,
        }
    }
}

impl PushCommand {
    /// Execute the push workflow.
    ///
    /// Nothing is sent to the hub unless configuration, file loading and
    /// validation all succeed.
    pub async fn execute(&self, config: &AppConfig, client: &dyn HubClient) -> AppResult<PushReceipt> {
        section_header("PUSH OPTIMIZED PROMPT TO LANGSMITH HUB");
        config.require(REQUIRED_SETTINGS)?;
        let username = config.required(Setting::Username)?;

        println!("Loading prompt from: {}", self.input.display());
        let record = load_record(&config.resolve(&self.input), &self.record_key).inspect_err(|_| {
            println!(
                "   Create '{}' with key '{}' holding the optimized prompt.",
                self.input.display(),
                self.record_key
            );
        })?;

        println!("Validating prompt...");
        let report = validate(&record);
        if !report.is_valid() {
            return Err(AppError::Validation(report.errors));
        }

        println!("✓ Validation OK");
        println!("  Version: {}", record.version.as_deref().unwrap_or("?"));
        println!("  Techniques: {}", record.techniques_applied.join(", "));

        let request = PushRequest {
            prompt: PromptRef::new(username, &self.record_key),
            template: build_template(&record),
            is_public: self.is_public,
            description: record.description.clone(),
            tags: record.hub_tags(),
        };

        println!("Publishing: {}", request.prompt.full_name());
        tracing::debug!(
            "Publishing {} messages via {}",
            request.template.messages.len(),
            client.provider_name()
        );

        let receipt = client.push(&request).await?;
        println!("✓ Prompt published");
        println!("  URL: {}", receipt.url);

        Ok(receipt)
    }
}
