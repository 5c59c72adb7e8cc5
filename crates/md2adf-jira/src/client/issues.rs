//! Issue operations for Jira API.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::info;

use super::JiraClient;
use crate::error::JiraError;
use crate::payload::{IssueDraft, IssueUpdate};
use crate::types::{CreatedIssue, Issue, SearchResponse, SearchResult};

/// Fields requested by issue searches.
const SEARCH_FIELDS: &str = "summary,status,assignee,priority,issuetype,created,updated,attachment";

impl JiraClient {
    /// Search issues with a JQL query.
    pub fn search_issues(&self, jql: &str, max_results: u32) -> Result<SearchResult, JiraError> {
        let url = format!(
            "{}/search/jql?jql={}&maxResults={}&fields={}",
            self.api_url(),
            utf8_percent_encode(jql, NON_ALPHANUMERIC),
            max_results,
            utf8_percent_encode(SEARCH_FIELDS, NON_ALPHANUMERIC),
        );

        info!("Searching issues: {}", jql);

        let response: SearchResponse = self.get_json(&url)?;
        let result = SearchResult::from(response);
        info!("Found {} issues", result.issues.len());
        Ok(result)
    }

    /// Get issue with all fields.
    pub fn get_issue(&self, key: &str) -> Result<Issue, JiraError> {
        let url = format!("{}/issue/{}?fields=*all", self.api_url(), key);

        info!("Getting issue {}", key);

        self.get_json(&url)
    }

    /// Create a new issue.
    pub fn create_issue(&self, draft: &IssueDraft) -> Result<CreatedIssue, JiraError> {
        let url = format!("{}/issue", self.api_url());

        info!(
            "Creating {} '{}' in project {}",
            draft.issue_type, draft.summary, draft.project_key
        );

        let created: CreatedIssue = self.post_json(&url, &draft.to_payload())?.read_json()?;
        info!("Created issue {}", created.key);
        Ok(created)
    }

    /// Update fields of an existing issue.
    ///
    /// Does nothing if `update` is empty.
    pub fn update_issue(&self, key: &str, update: &IssueUpdate) -> Result<(), JiraError> {
        if update.is_empty() {
            return Ok(());
        }

        let url = format!("{}/issue/{}", self.api_url(), key);

        info!("Updating issue {}", key);

        self.put_json(&url, &update.to_payload())
    }
}
