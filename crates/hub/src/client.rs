//! Hub client abstraction and request/response types.

use promptops_core::{AppError, AppResult};
use promptops_prompt::ChatTemplate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Commit selector meaning "most recent commit".
pub const LATEST_COMMIT: &str = "latest";

/// Identifier of a prompt on the hub: `owner/repo[:commit]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRef {
    pub owner: String,
    pub repo: String,
    pub commit: String,
}

impl PromptRef {
    /// Reference the latest commit of `owner/repo`.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            commit: LATEST_COMMIT.to_string(),
        }
    }

    /// `owner/repo` without the commit selector.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl FromStr for PromptRef {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let (path, commit) = match s.split_once(':') {
            Some((path, commit)) => (path, commit),
            None => (s, LATEST_COMMIT),
        };

        let invalid = || {
            AppError::Config(format!(
                "Invalid prompt identifier '{}'. Expected 'owner/repo' or 'owner/repo:commit'",
                s
            ))
        };

        let (owner, repo) = path.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') || commit.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            commit: commit.to_string(),
        })
    }
}

impl fmt::Display for PromptRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.commit == LATEST_COMMIT {
            write!(f, "{}/{}", self.owner, self.repo)
        } else {
            write!(f, "{}/{}:{}", self.owner, self.repo, self.commit)
        }
    }
}

/// A prompt as returned by the hub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulledPrompt {
    pub commit_hash: String,

    /// LangChain serialized template
    pub manifest: serde_json::Value,
}

impl PulledPrompt {
    /// Role-tagged messages found in the manifest.
    pub fn template(&self) -> ChatTemplate {
        ChatTemplate::from_manifest(&self.manifest)
    }

    /// Raw rendering of the whole manifest.
    pub fn raw(&self) -> String {
        serde_json::to_string_pretty(&self.manifest).unwrap_or_else(|_| self.manifest.to_string())
    }
}

/// Publish request for one prompt.
#[derive(Debug, Clone)]
pub struct PushRequest {
    pub prompt: PromptRef,
    pub template: ChatTemplate,
    pub is_public: bool,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Result of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReceipt {
    pub commit_hash: String,
    pub url: String,
}

/// Trait for prompt hub providers.
#[async_trait::async_trait]
pub trait HubClient: Send + Sync {
    /// Get the provider name (e.g., "langsmith").
    fn provider_name(&self) -> &str;

    /// Fetch a prompt.
    async fn pull(&self, prompt: &PromptRef) -> AppResult<PulledPrompt>;

    /// Create or update the prompt repository and commit a new template.
    async fn push(&self, request: &PushRequest) -> AppResult<PushReceipt>;
}
