//! Prompt record types.
//!
//! A record file is a YAML mapping with one top-level key per record name.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Placeholder used for the human turn when a record has no user prompt.
pub const DEFAULT_USER_PROMPT: &str = "{bug_report}";

/// Contents of a record file, keyed by record name.
pub type PromptFile = BTreeMap<String, PromptRecord>;

/// One prompt as stored on disk.
///
/// `description`, `system_prompt` and `version` are `None` only when the key
/// is absent; a key with a null or empty value reads as `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    #[serde(
        default,
        deserialize_with = "present_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Remote identifier the record was pulled from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(
        default,
        deserialize_with = "present_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_prompt: Option<String>,

    /// Human turn template; may hold a `{bug_report}` style placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,

    #[serde(
        default,
        deserialize_with = "present_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    /// Ordered input/output pairs replayed as alternating turns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub few_shot_examples: Vec<FewShotExample>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub techniques_applied: Vec<String>,
}

/// Only called when the key exists, so a null value still marks it present.
fn present_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

/// A demonstration pair inserted into the message sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FewShotExample {
    #[serde(default)]
    pub input: String,

    #[serde(default)]
    pub output: String,
}

impl FewShotExample {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl PromptRecord {
    /// System prompt text, empty when the key is absent.
    pub fn system_text(&self) -> &str {
        self.system_prompt.as_deref().unwrap_or("")
    }

    /// User prompt text, empty when the key is absent.
    pub fn user_text(&self) -> &str {
        self.user_prompt.as_deref().unwrap_or("")
    }

    /// Tags to attach to the hub repository: record tags then techniques,
    /// without duplicates.
    pub fn hub_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags.iter().chain(self.techniques_applied.iter()) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }
}
