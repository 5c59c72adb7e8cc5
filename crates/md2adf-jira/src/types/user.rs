//! Jira user types.

use serde::Deserialize;

/// Jira user.
///
/// Only includes fields that are actually used.
/// Serde ignores unknown fields from the API response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account ID, used for assignment.
    #[serde(default)]
    pub account_id: String,
    /// Display name.
    pub display_name: String,
    /// Email address (hidden by some privacy settings).
    #[serde(default)]
    pub email_address: Option<String>,
}
