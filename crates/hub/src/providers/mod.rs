//! Hub provider implementations.

pub mod langsmith;
pub mod mock;

pub use langsmith::LangSmithClient;
pub use mock::{MockCall, MockHubClient};
