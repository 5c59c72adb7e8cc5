//! Worklog operations for Jira API.

use md2adf_converter::Document;
use tracing::info;

use super::JiraClient;
use crate::error::JiraError;
use crate::payload::worklog_payload;
use crate::types::Worklog;

impl JiraClient {
    /// Log work on an issue.
    pub fn add_worklog(
        &self,
        key: &str,
        time_spent_seconds: u64,
        comment: Option<&Document>,
    ) -> Result<Worklog, JiraError> {
        let url = format!("{}/issue/{}/worklog", self.api_url(), key);

        info!("Logging {}s on issue {}", time_spent_seconds, key);

        let payload = worklog_payload(time_spent_seconds, comment);
        Ok(self.post_json(&url, &payload)?.read_json()?)
    }
}
