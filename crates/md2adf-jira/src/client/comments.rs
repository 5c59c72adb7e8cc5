//! Comment operations for Jira API.

use md2adf_converter::Document;
use tracing::info;

use super::JiraClient;
use crate::error::JiraError;
use crate::payload::comment_payload;
use crate::types::Comment;

impl JiraClient {
    /// Add a comment to an issue.
    pub fn add_comment(&self, key: &str, body: &Document) -> Result<Comment, JiraError> {
        let url = format!("{}/issue/{}/comment", self.api_url(), key);

        info!("Adding comment to issue {}", key);

        Ok(self.post_json(&url, &comment_payload(body))?.read_json()?)
    }
}
