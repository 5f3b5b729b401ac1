//! Configuration management for the promptops workflows.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the working directory. The resulting [`AppConfig`] is
//! passed explicitly into each workflow.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Default LangSmith API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.smith.langchain.com";

/// Environment variable holding the hub API key.
pub const API_KEY_ENV: &str = "LANGSMITH_API_KEY";

/// Environment variable holding the hub username (publish namespace).
pub const USERNAME_ENV: &str = "USERNAME_LANGSMITH_HUB";

/// Environment variable overriding the API endpoint.
pub const API_URL_ENV: &str = "LANGSMITH_ENDPOINT";

/// Environment variable overriding the workspace root.
pub const WORKSPACE_ENV: &str = "PROMPTOPS_WORKSPACE";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory that `prompts/...` paths resolve against
    pub workspace: PathBuf,

    /// Hub API base URL
    pub api_url: String,

    /// Hub API key
    pub api_key: Option<String>,

    /// Hub username, used as the namespace for published prompts
    pub username: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Disable colored output
    pub no_color: bool,
}

/// A configuration value a workflow cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    ApiKey,
    Username,
}

impl Setting {
    /// Environment variable backing this setting.
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::ApiKey => API_KEY_ENV,
            Self::Username => USERNAME_ENV,
        }
    }

    fn missing_message(&self) -> String {
        format!("{} is not set ({})", self.env_var(), self.hint())
    }

    fn hint(&self) -> &'static str {
        match self {
            Self::ApiKey => "create an API key in the LangSmith settings page and add it to .env",
            Self::Username => {
                "publish any prompt on the LangSmith Hub to get a handle, \
                 then open the prompt, click the lock icon and copy the username"
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            username: None,
            log_level: None,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment.
    ///
    /// Environment variables:
    /// - `LANGSMITH_API_KEY`: hub API key
    /// - `USERNAME_LANGSMITH_HUB`: hub username
    /// - `LANGSMITH_ENDPOINT`: API base URL
    /// - `PROMPTOPS_WORKSPACE`: override workspace path
    /// - `RUST_LOG`: log level
    /// - `NO_COLOR`: disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use promptops_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Workspace: {:?}", config.workspace);
    /// ```
    pub fn load() -> AppResult<Self> {
        // A missing .env is normal; variables may come from the shell
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!("Loaded environment from {:?}", path);
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(workspace) = lookup(WORKSPACE_ENV) {
            config.workspace = PathBuf::from(workspace);
        }

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        if let Some(url) = non_blank(lookup(API_URL_ENV)) {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        config.api_key = non_blank(lookup(API_KEY_ENV));
        config.username = non_blank(lookup(USERNAME_ENV));
        config.log_level = non_blank(lookup("RUST_LOG"));
        config.no_color = lookup("NO_COLOR").is_some();

        Ok(config)
    }

    /// Ensure every listed setting is present.
    ///
    /// All missing settings are reported together in one error.
    pub fn require(&self, settings: &[Setting]) -> AppResult<()> {
        let missing: Vec<String> = settings
            .iter()
            .filter(|setting| self.value(**setting).is_none())
            .map(|setting| setting.missing_message())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingConfiguration(missing.join("; ")))
        }
    }

    /// Value of one required setting.
    pub fn required(&self, setting: Setting) -> AppResult<&str> {
        self.value(setting)
            .ok_or_else(|| AppError::MissingConfiguration(setting.missing_message()))
    }

    fn value(&self, setting: Setting) -> Option<&str> {
        match setting {
            Setting::ApiKey => self.api_key.as_deref(),
            Setting::Username => self.username.as_deref(),
        }
    }

    /// Resolve a workspace-relative path.
    pub fn resolve(&self, relative: impl AsRef<std::path::Path>) -> PathBuf {
        self.workspace.join(relative)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
