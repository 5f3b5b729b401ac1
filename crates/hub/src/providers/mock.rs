//! In-memory hub provider for tests.
//!
//! Serves a canned manifest on pull, accepts every push, and records each
//! call so tests can assert which remote operations happened.

use crate::client::{HubClient, PromptRef, PulledPrompt, PushReceipt, PushRequest};
use promptops_core::{AppError, AppResult};
use std::sync::Mutex;

/// A call received by [`MockHubClient`].
#[derive(Debug, Clone)]
pub enum MockCall {
    Pull(PromptRef),
    Push(PushRequest),
}

/// Mock hub client.
pub struct MockHubClient {
    manifest: serde_json::Value,
    failure: Option<String>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockHubClient {
    /// Create a mock that serves `manifest` on every pull.
    pub fn new(manifest: serde_json::Value) -> Self {
        Self {
            manifest,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose every call fails with a remote error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            manifest: serde_json::Value::Null,
            failure: Some(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Push requests received so far.
    pub fn pushes(&self) -> Vec<PushRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::Push(request) => Some(request),
                MockCall::Pull(_) => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) -> AppResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match &self.failure {
            Some(message) => Err(AppError::Remote(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockHubClient {
    fn default() -> Self {
        Self::new(serde_json::Value::Null)
    }
}

#[async_trait::async_trait]
impl HubClient for MockHubClient {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn pull(&self, prompt: &PromptRef) -> AppResult<PulledPrompt> {
        self.record(MockCall::Pull(prompt.clone()))?;
        Ok(PulledPrompt {
            commit_hash: "mock-commit".to_string(),
            manifest: self.manifest.clone(),
        })
    }

    async fn push(&self, request: &PushRequest) -> AppResult<PushReceipt> {
        self.record(MockCall::Push(request.clone()))?;
        Ok(PushReceipt {
            commit_hash: "mock-commit".to_string(),
            url: format!("mock://{}", request.prompt.full_name()),
        })
    }
}
