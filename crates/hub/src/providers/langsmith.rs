//! LangSmith Prompt Hub provider.
//!
//! Talks to the LangSmith REST API with an `x-api-key` header.
//! Prompts live under `/repos/{owner}/{repo}` and their versions under
//! `/commits/{owner}/{repo}`.

use crate::client::{HubClient, PromptRef, PulledPrompt, PushReceipt, PushRequest};
use promptops_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Web UI base used to build links to published prompts.
pub const HUB_WEB_URL: &str = "https://smith.langchain.com/hub";

/// Repository creation payload.
#[derive(Debug, Serialize)]
struct CreateRepoRequest<'a> {
    repo_handle: &'a str,
    is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    tags: &'a [String],
}

/// Repository update payload.
#[derive(Debug, Serialize)]
struct UpdateRepoRequest<'a> {
    is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    tags: &'a [String],
}

/// Commit creation payload.
#[derive(Debug, Serialize)]
struct CreateCommitRequest {
    manifest: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_commit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommitManifestResponse {
    commit_hash: String,
    manifest: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct CommitSummary {
    commit_hash: String,
}

#[derive(Debug, Deserialize)]
struct ListCommitsResponse {
    #[serde(default)]
    commits: Vec<CommitSummary>,
}

#[derive(Debug, Deserialize)]
struct CreateCommitResponse {
    commit: CommitSummary,
}

/// LangSmith hub client.
pub struct LangSmithClient {
    /// Base URL for the LangSmith API
    base_url: String,

    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl LangSmithClient {
    /// Create a client for the given API base URL.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn repo_url(&self, prompt: &PromptRef) -> String {
        format!("{}/repos/{}/{}", self.base_url, prompt.owner, prompt.repo)
    }

    fn commits_url(&self, prompt: &PromptRef) -> String {
        format!("{}/commits/{}/{}", self.base_url, prompt.owner, prompt.repo)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        tracing::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header("x-api-key", &self.api_key)
    }

    async fn send(&self, builder: reqwest::RequestBuilder, action: &str) -> AppResult<reqwest::Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to {}: {}", action, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Remote(format!(
                "Failed to {} ({}): {}",
                action, status, error_text
            )));
        }

        Ok(response)
    }

    async fn repo_exists(&self, prompt: &PromptRef) -> AppResult<bool> {
        let response = self
            .request(reqwest::Method::GET, &self.repo_url(prompt))
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to look up {}: {}", prompt.full_name(), e)))?;

        match response.status() {
            status if status.is_success() => Ok(true),
            reqwest::StatusCode::NOT_FOUND => Ok(false),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(AppError::Remote(format!(
                    "Failed to look up {} ({}): {}",
                    prompt.full_name(),
                    status,
                    error_text
                )))
            }
        }
    }

    async fn ensure_repo(&self, request: &PushRequest) -> AppResult<()> {
        let prompt = &request.prompt;
        let description = request.description.as_deref();

        if self.repo_exists(prompt).await? {
            tracing::info!("Updating existing repository {}", prompt.full_name());
            let body = UpdateRepoRequest {
                is_public: request.is_public,
                description,
                tags: &request.tags,
            };
            self.send(
                self.request(reqwest::Method::PATCH, &self.repo_url(prompt)).json(&body),
                "update repository",
            )
            .await?;
        } else {
            tracing::info!("Creating repository {}", prompt.full_name());
            let body = CreateRepoRequest {
                repo_handle: &prompt.repo,
                is_public: request.is_public,
                description,
                tags: &request.tags,
            };
            let url = format!("{}/repos/", self.base_url);
            self.send(
                self.request(reqwest::Method::POST, &url).json(&body),
                "create repository",
            )
            .await?;
        }

        Ok(())
    }

    async fn latest_commit(&self, prompt: &PromptRef) -> AppResult<Option<String>> {
        let url = format!("{}/", self.commits_url(prompt));
        let response = self
            .send(
                self.request(reqwest::Method::GET, &url)
                    .query(&[("limit", "1"), ("offset", "0")]),
                "list commits",
            )
            .await?;

        let commits: ListCommitsResponse = response
            .json()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to parse commit list: {}", e)))?;

        Ok(commits.commits.into_iter().next().map(|c| c.commit_hash))
    }
}

#[async_trait::async_trait]
impl HubClient for LangSmithClient {
    fn provider_name(&self) -> &str {
        "langsmith"
    }

    async fn pull(&self, prompt: &PromptRef) -> AppResult<PulledPrompt> {
        tracing::info!("Pulling {} from LangSmith", prompt);

        let url = format!("{}/{}", self.commits_url(prompt), prompt.commit);
        let response = self
            .send(self.request(reqwest::Method::GET, &url), "pull prompt")
            .await?;

        let body: CommitManifestResponse = response
            .json()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to parse prompt manifest: {}", e)))?;

        tracing::info!("Pulled commit {}", body.commit_hash);

        Ok(PulledPrompt {
            commit_hash: body.commit_hash,
            manifest: body.manifest,
        })
    }

    async fn push(&self, request: &PushRequest) -> AppResult<PushReceipt> {
        let prompt = &request.prompt;
        tracing::info!("Pushing {} to LangSmith", prompt.full_name());

        self.ensure_repo(request).await?;

        let parent_commit = self.latest_commit(prompt).await?;
        tracing::debug!("Parent commit: {:?}", parent_commit);

        let body = CreateCommitRequest {
            manifest: request.template.to_manifest(),
            parent_commit,
        };
        let response = self
            .send(
                self.request(reqwest::Method::POST, &self.commits_url(prompt)).json(&body),
                "create commit",
            )
            .await?;

        let created: CreateCommitResponse = response
            .json()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to parse commit response: {}", e)))?;

        tracing::info!("Created commit {}", created.commit.commit_hash);

        Ok(PushReceipt {
            commit_hash: created.commit.commit_hash,
            url: format!("{}/{}", HUB_WEB_URL, prompt.full_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = LangSmithClient::new("https://api.smith.langchain.com/", "key");
        let prompt: PromptRef = "alice/story".parse().unwrap();
        assert_eq!(
            client.repo_url(&prompt),
            "https://api.smith.langchain.com/repos/alice/story"
        );
        assert_eq!(
            client.commits_url(&prompt),
            "https://api.smith.langchain.com/commits/alice/story"
        );
    }

    #[test]
    fn test_create_repo_payload() {
        let tags = vec!["few-shot".to_string()];
        let body = CreateRepoRequest {
            repo_handle: "story",
            is_public: true,
            description: None,
            tags: &tags,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"repo_handle": "story", "is_public": true, "tags": ["few-shot"]})
        );
    }

    #[test]
    fn test_commit_response_parsing() {
        let body: CommitManifestResponse = serde_json::from_str(
            r#"{"commit_hash": "abc123", "manifest": {"lc": 1}, "examples": []}"#,
        )
        .unwrap();
        assert_eq!(body.commit_hash, "abc123");

        let created: CreateCommitResponse =
            serde_json::from_str(r#"{"commit": {"commit_hash": "def456", "id": "x"}}"#).unwrap();
        assert_eq!(created.commit.commit_hash, "def456");

        let empty: ListCommitsResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(empty.commits.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_hub_is_remote_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = LangSmithClient::new("http://127.0.0.1:9", "key");
        let prompt: PromptRef = "alice/story".parse().unwrap();

        let result = client.pull(&prompt).await;
        assert!(matches!(result, Err(AppError::Remote(_))));
    }
}
