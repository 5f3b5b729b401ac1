//! Conversion between prompt records and chat templates.

use crate::template::{ChatTemplate, Role};
use crate::types::{PromptRecord, DEFAULT_USER_PROMPT};

/// Build the publishable chat template for a record.
///
/// Message order:
/// 1. system message from `system_prompt`
/// 2. for each few-shot example, a human turn (`input`) then an ai turn (`output`)
/// 3. a final human turn from `user_prompt` (defaults to `{bug_report}`)
pub fn build_template(record: &PromptRecord) -> ChatTemplate {
    let mut messages = Vec::with_capacity(record.few_shot_examples.len() * 2 + 2);

    messages.push((Role::System, record.system_text().to_string()));
    for example in &record.few_shot_examples {
        messages.push((Role::Human, example.input.clone()));
        messages.push((Role::Ai, example.output.clone()));
    }
    messages.push((
        Role::Human,
        record
            .user_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_PROMPT.to_string()),
    ));

    tracing::debug!("Built template with {} messages", messages.len());

    ChatTemplate::from_messages(messages)
}

/// System and user text recovered from a pulled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPrompts {
    pub system: String,
    pub user: String,
}

/// Recover system and user text from a chat template.
///
/// The last message of each role wins. Returns `None` when neither role
/// carries any text.
pub fn extract_prompts(template: &ChatTemplate) -> Option<ExtractedPrompts> {
    let mut system = String::new();
    let mut user = String::new();

    for message in &template.messages {
        match message.role {
            Role::System => system = message.template.clone(),
            Role::Human => user = message.template.clone(),
            Role::Ai => {}
        }
    }

    if system.is_empty() && user.is_empty() {
        None
    } else {
        Some(ExtractedPrompts { system, user })
    }
}
