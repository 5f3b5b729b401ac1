//! Error types for the promptops workflows.
//!
//! This module defines a unified error enum covering every failure a fetch,
//! publish or check run can hit: missing configuration, remote hub failures,
//! record file problems and validation gate failures.

use thiserror::Error;

/// Unified error type for the promptops workflows.
///
/// All functions in the workspace return `Result<T, AppError>`.
/// Every kind is handled the same way at the top level: a message is printed
/// and the process exits with code 1.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required environment value is absent
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// Hub pull/push failed (transport, status or body)
    #[error("Remote hub error: {0}")]
    Remote(String),

    /// Structured record file missing, unreadable or malformed
    #[error("Failed to load prompt file: {0}")]
    FileLoad(String),

    /// One or more validation gate checks failed
    #[error("Prompt failed validation:{}", format_errors(.0))]
    Validation(Vec<String>),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn format_errors(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("\n   • {}", e))
        .collect::<String>()
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_message() {
        let err = AppError::Validation(vec![
            "'system_prompt' is empty".to_string(),
            "At least 2 techniques required".to_string(),
        ]);
        let rendered = err.to_string();
        assert!(rendered.starts_with("Prompt failed validation:"));
        assert!(rendered.contains("\n   • 'system_prompt' is empty"));
        assert!(rendered.contains("\n   • At least 2 techniques required"));
    }

    #[test]
    fn test_yaml_error_maps_to_serialization() {
        let err: AppError = serde_yaml::from_str::<Vec<String>>("a: b")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
