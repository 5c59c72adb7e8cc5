//! CLI error types.

use md2adf_config::ConfigError;
use md2adf_confluence::ConfluenceError;
use md2adf_jira::JiraError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Confluence(#[from] ConfluenceError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Jira(#[from] JiraError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
