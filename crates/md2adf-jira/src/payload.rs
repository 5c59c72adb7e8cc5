//! Request payloads for issue, comment and worklog endpoints.
//!
//! Rich-text fields take a converted [`Document`] and are sent as ADF.

use md2adf_converter::Document;
use serde_json::{Map, Value, json};

/// Fields of a new issue.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    /// Project key.
    pub project_key: String,
    /// Summary line.
    pub summary: String,
    /// Issue type name, e.g. `Task` or `Sub-task`.
    pub issue_type: String,
    /// Description.
    pub description: Option<Document>,
    /// Parent epic or issue key.
    pub parent_key: Option<String>,
    /// Assignee account ID.
    pub assignee_account_id: Option<String>,
}

impl IssueDraft {
    /// Draft with the required fields set.
    pub fn new(
        project_key: impl Into<String>,
        summary: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            project_key: project_key.into(),
            summary: summary.into(),
            issue_type: issue_type.into(),
            description: None,
            parent_key: None,
            assignee_account_id: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: Document) -> Self {
        self.description = Some(description);
        self
    }

    /// Set the parent epic or issue.
    #[must_use]
    pub fn with_parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    /// Set the assignee.
    #[must_use]
    pub fn with_assignee(mut self, account_id: impl Into<String>) -> Self {
        self.assignee_account_id = Some(account_id.into());
        self
    }

    /// Body of `POST /issue`.
    pub fn to_payload(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("project".to_owned(), json!({ "key": self.project_key }));
        fields.insert("summary".to_owned(), json!(self.summary));
        fields.insert("issuetype".to_owned(), json!({ "name": self.issue_type }));
        if let Some(parent) = &self.parent_key {
            fields.insert("parent".to_owned(), json!({ "key": parent }));
        }
        if let Some(description) = &self.description {
            fields.insert("description".to_owned(), description.to_adf_value());
        }
        if let Some(account_id) = &self.assignee_account_id {
            fields.insert("assignee".to_owned(), json!({ "accountId": account_id }));
        }
        json!({ "fields": fields })
    }
}

/// Field changes for an existing issue. Unset fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct IssueUpdate {
    /// New summary line.
    pub summary: Option<String>,
    /// New description.
    pub description: Option<Document>,
    /// New parent epic.
    pub parent_key: Option<String>,
}

impl IssueUpdate {
    /// Returns `true` if no field would change.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.description.is_none() && self.parent_key.is_none()
    }

    /// Body of `PUT /issue/{key}`.
    pub fn to_payload(&self) -> Value {
        let mut fields = Map::new();
        if let Some(summary) = &self.summary {
            fields.insert("summary".to_owned(), json!(summary));
        }
        if let Some(description) = &self.description {
            fields.insert("description".to_owned(), description.to_adf_value());
        }
        if let Some(parent) = &self.parent_key {
            fields.insert("parent".to_owned(), json!({ "key": parent }));
        }
        json!({ "fields": fields })
    }
}

/// Body of `POST /issue/{key}/comment`.
pub(crate) fn comment_payload(body: &Document) -> Value {
    json!({ "body": body.to_adf_value() })
}

/// Body of `POST /issue/{key}/worklog`.
pub(crate) fn worklog_payload(time_spent_seconds: u64, comment: Option<&Document>) -> Value {
    let mut payload = json!({ "timeSpentSeconds": time_spent_seconds });
    if let Some(comment) = comment {
        payload["comment"] = comment.to_adf_value();
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use md2adf_converter::convert;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_draft() {
        let draft = IssueDraft::new("OPS", "Fix login", "Bug");
        assert_eq!(
            draft.to_payload(),
            json!({
                "fields": {
                    "project": { "key": "OPS" },
                    "summary": "Fix login",
                    "issuetype": { "name": "Bug" }
                }
            })
        );
    }

    #[test]
    fn test_full_draft() {
        let draft = IssueDraft::new("OPS", "Subtask", "Sub-task")
            .with_parent("OPS-1")
            .with_assignee("acc-1")
            .with_description(convert("**Note**"));
        let payload = draft.to_payload();
        assert_eq!(payload["fields"]["parent"], json!({ "key": "OPS-1" }));
        assert_eq!(payload["fields"]["assignee"], json!({ "accountId": "acc-1" }));
        assert_eq!(payload["fields"]["description"]["type"], "doc");
        assert_eq!(
            payload["fields"]["description"]["content"][0]["content"][0]["marks"][0]["type"],
            "strong"
        );
    }

    #[test]
    fn test_update_only_set_fields() {
        let update = IssueUpdate {
            summary: Some("New title".to_owned()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert_eq!(
            update.to_payload(),
            json!({ "fields": { "summary": "New title" } })
        );
        assert!(IssueUpdate::default().is_empty());
    }

    #[test]
    fn test_comment_payload() {
        let payload = comment_payload(&convert("done"));
        assert_eq!(
            payload,
            json!({
                "body": {
                    "type": "doc",
                    "version": 1,
                    "content": [{
                        "type": "paragraph",
                        "content": [{ "type": "text", "text": "done" }]
                    }]
                }
            })
        );
    }

    #[test]
    fn test_worklog_payload() {
        assert_eq!(
            worklog_payload(5400, None),
            json!({ "timeSpentSeconds": 5400 })
        );
        let with_comment = worklog_payload(60, Some(&convert("- reviewed")));
        assert_eq!(with_comment["comment"]["content"][0]["type"], "bulletList");
    }
}
