//! Jira attachment types.

use serde::Deserialize;

use super::User;

/// Issue attachment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Attachment ID.
    pub id: String,
    /// File name.
    pub filename: String,
    /// MIME type reported by Jira.
    #[serde(default)]
    pub mime_type: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Download URL.
    pub content: String,
    /// Uploader.
    #[serde(default)]
    pub author: Option<User>,
    /// Upload timestamp.
    #[serde(default)]
    pub created: Option<String>,
}
