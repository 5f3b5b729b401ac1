//! Hub client factory.
//!
//! Builds the client used by the workflows from application configuration.

use crate::client::HubClient;
use crate::providers::LangSmithClient;
use promptops_core::{AppConfig, AppResult, Setting};
use std::sync::Arc;

/// Create a hub client from configuration.
///
/// # Errors
/// Returns `MissingConfiguration` when no API key is configured.
pub fn create_client(config: &AppConfig) -> AppResult<Arc<dyn HubClient>> {
    let api_key = config.required(Setting::ApiKey)?;

    tracing::debug!("Creating LangSmith client for {}", config.api_url);

    Ok(Arc::new(LangSmithClient::new(&config.api_url, api_key)))
}
