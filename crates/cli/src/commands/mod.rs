//! Workflow handlers for the promptops binaries.
//!
//! Each workflow is a standalone, zero-argument run.

pub mod check;
pub mod pull;
pub mod push;

// Re-export command types for convenience
pub use check::CheckCommand;
pub use pull::PullCommand;
pub use push::PushCommand;
