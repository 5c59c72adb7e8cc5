//! Plain-text rendering of issues.

use md2adf_jira::{Attachment, Issue, format_file_size};

/// Summary lines of an issue.
pub(super) fn issue_lines(issue: &Issue) -> Vec<String> {
    let fields = &issue.fields;
    let name = |named: Option<&md2adf_jira::Named>, fallback: &str| {
        named.map_or_else(|| fallback.to_owned(), |n| n.name.clone())
    };

    let mut lines = vec![
        format!(
            "{}: {}",
            issue.key,
            fields.summary.as_deref().unwrap_or("No summary")
        ),
        format!("  Status:   {}", name(fields.status.as_ref(), "Unknown")),
        format!("  Type:     {}", name(fields.issue_type.as_ref(), "Unknown")),
        format!(
            "  Assignee: {}",
            fields
                .assignee
                .as_ref()
                .map_or("Unassigned", |user| user.display_name.as_str())
        ),
        format!("  Priority: {}", name(fields.priority.as_ref(), "None")),
        format!(
            "  Updated:  {}",
            fields.updated.as_deref().unwrap_or("Unknown")
        ),
    ];
    lines.extend(attachment_lines(fields.attachments()));
    lines
}

/// Attachment listing, empty when there are none.
pub(super) fn attachment_lines(attachments: &[Attachment]) -> Vec<String> {
    if attachments.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![format!("  Attachments: {} file(s)", attachments.len())];
    for attachment in attachments {
        lines.push(format!(
            "    - {} (ID: {}) - {}, {}",
            attachment.filename,
            attachment.id,
            format_file_size(attachment.size),
            attachment.mime_type
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn issue(raw: &str) -> Issue {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_issue_lines_with_fallbacks() {
        let lines = issue_lines(&issue(r#"{"id": "1", "key": "OPS-1"}"#));
        assert_eq!(
            lines,
            vec![
                "OPS-1: No summary",
                "  Status:   Unknown",
                "  Type:     Unknown",
                "  Assignee: Unassigned",
                "  Priority: None",
                "  Updated:  Unknown",
            ]
        );
    }

    #[test]
    fn test_issue_lines_with_attachments() {
        let lines = issue_lines(&issue(
            r#"{"id": "1", "key": "OPS-2", "fields": {
                "summary": "Broken build",
                "status": {"name": "Open"},
                "assignee": {"accountId": "a", "displayName": "Grace"},
                "attachment": [{
                    "id": "77", "filename": "build.log", "mimeType": "text/plain",
                    "size": 3072, "content": "https://x/77"
                }]
            }}"#,
        ));
        assert_eq!(lines[0], "OPS-2: Broken build");
        assert_eq!(lines[3], "  Assignee: Grace");
        assert_eq!(lines[6], "  Attachments: 1 file(s)");
        assert_eq!(lines[7], "    - build.log (ID: 77) - 3.0 KB, text/plain");
    }
}
