//! Jira issue types.

use md2adf_converter::AdfDocument;
use serde::Deserialize;

use super::{Attachment, User};

/// Jira issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Issue ID.
    pub id: String,
    /// Issue key, e.g. `OPS-12`.
    pub key: String,
    /// API self link.
    #[serde(rename = "self", default)]
    pub self_link: String,
    /// Issue fields.
    #[serde(default)]
    pub fields: IssueFields,
}

/// Issue fields.
///
/// Only includes fields that are actually used; every field is optional
/// because search requests ask for a subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssueFields {
    /// Summary line.
    pub summary: Option<String>,
    /// Workflow status.
    pub status: Option<Named>,
    /// Assignee.
    pub assignee: Option<User>,
    /// Priority.
    pub priority: Option<Named>,
    /// Issue type.
    #[serde(rename = "issuetype")]
    pub issue_type: Option<Named>,
    /// Creation timestamp.
    pub created: Option<String>,
    /// Last update timestamp.
    pub updated: Option<String>,
    /// Description in ADF.
    pub description: Option<AdfDocument>,
    /// Attachments.
    #[serde(rename = "attachment")]
    pub attachments: Option<Vec<Attachment>>,
}

impl IssueFields {
    /// Attachments, empty if none were returned.
    pub fn attachments(&self) -> &[Attachment] {
        self.attachments.as_deref().unwrap_or_default()
    }
}

/// Object identified by name (status, priority, issue type).
#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    /// Display name.
    pub name: String,
}

/// Search API response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) issues: Vec<Issue>,
    #[serde(default)]
    pub(crate) total: Option<usize>,
}

/// Search result.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Matching issues (at most the requested page size).
    pub issues: Vec<Issue>,
    /// Total match count, or the page size when Jira does not report it.
    pub total: usize,
}

impl From<SearchResponse> for SearchResult {
    fn from(response: SearchResponse) -> Self {
        let total = response.total.unwrap_or(response.issues.len());
        Self {
            issues: response.issues,
            total,
        }
    }
}

/// Response of issue creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    /// Issue ID.
    pub id: String,
    /// Issue key.
    pub key: String,
    /// API self link.
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Created comment.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Comment ID.
    pub id: String,
}

/// Created worklog entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    /// Worklog ID.
    pub id: String,
    /// Logged time in seconds.
    #[serde(default)]
    pub time_spent_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_issue() {
        let raw = r#"{
            "id": "10001",
            "key": "OPS-7",
            "self": "https://acme.atlassian.net/rest/api/3/issue/10001",
            "fields": {
                "summary": "Rotate certificates",
                "status": {"name": "In Progress", "id": "3"},
                "assignee": {"accountId": "abc", "displayName": "Ada", "active": true},
                "priority": null,
                "issuetype": {"name": "Task"},
                "updated": "2024-05-01T10:00:00.000+0000",
                "description": {"type": "doc", "version": 1, "content": [
                    {"type": "paragraph", "content": [{"type": "text", "text": "Details"}]}
                ]},
                "attachment": [{
                    "id": "900",
                    "filename": "log.txt",
                    "mimeType": "text/plain",
                    "size": 2048,
                    "content": "https://acme.atlassian.net/rest/api/3/attachment/content/900"
                }]
            }
        }"#;
        let issue: Issue = serde_json::from_str(raw).unwrap();
        assert_eq!(issue.key, "OPS-7");
        assert_eq!(issue.fields.summary.as_deref(), Some("Rotate certificates"));
        assert_eq!(issue.fields.status.unwrap().name, "In Progress");
        assert_eq!(issue.fields.assignee.unwrap().display_name, "Ada");
        assert!(issue.fields.priority.is_none());
        assert_eq!(issue.fields.description.unwrap().plain_text(), "Details");
        assert_eq!(issue.fields.attachments.unwrap()[0].size, 2048);
    }

    #[test]
    fn test_null_attachment_field() {
        let issue: Issue =
            serde_json::from_str(r#"{"id": "1", "key": "A-1", "fields": {"attachment": null}}"#)
                .unwrap();
        assert!(issue.fields.attachments().is_empty());
    }

    #[test]
    fn test_search_total_falls_back_to_page_size() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"issues": [{"id": "1", "key": "A-1"}, {"id": "2", "key": "A-2"}], "isLast": true}"#,
        )
        .unwrap();
        let result = SearchResult::from(response);
        assert_eq!(result.total, 2);
    }
}
