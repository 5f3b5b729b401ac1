//! Promptops Core Library
//!
//! Foundational utilities shared by the promptops crates:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, Setting};
pub use error::{AppError, AppResult};
