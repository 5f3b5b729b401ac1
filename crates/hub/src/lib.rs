//! Prompt hub integration for promptops.
//!
//! This crate provides a provider-agnostic abstraction over a remote prompt
//! registry, with a LangSmith implementation and an in-memory mock.
//!
//! # Example
//! ```no_run
//! use promptops_hub::{HubClient, PromptRef, providers::LangSmithClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LangSmithClient::new("https://api.smith.langchain.com", "lsv2_...");
//! let prompt: PromptRef = "leonanluppi/bug_to_user_story_v1".parse()?;
//! let pulled = client.pull(&prompt).await?;
//! println!("{} messages", pulled.template().messages.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{HubClient, PromptRef, PulledPrompt, PushReceipt, PushRequest, LATEST_COMMIT};
pub use factory::create_client;
pub use providers::{LangSmithClient, MockCall, MockHubClient};
