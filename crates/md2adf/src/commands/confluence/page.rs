//! `md2adf confluence page` command implementation.

use clap::Args;
use md2adf_confluence::{Attachment, Page};
use md2adf_jira::format_file_size;

use super::ConfluenceContext;
use crate::error::CliError;

/// Arguments for the confluence page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Page ID.
    id: String,
}

impl PageArgs {
    pub(crate) fn execute(self, ctx: &ConfluenceContext) -> Result<(), CliError> {
        let output = &ctx.output;
        let page = ctx.client.get_page(&self.id)?;

        for line in page_lines(&page) {
            output.data(&line)?;
        }
        if let Some(url) = ctx.client.page_url(&page) {
            output.data(&format!("  URL:     {url}"))?;
        }

        match ctx.client.get_attachments(&page.id) {
            Ok(attachments) if !attachments.is_empty() => {
                output.data("")?;
                output.data(&format!("Attachments ({}):", attachments.len()))?;
                for attachment in &attachments {
                    output.data(&attachment_line(attachment))?;
                }
            }
            Ok(_) => {}
            Err(err) => output.warning(&format!("Could not list attachments: {err}")),
        }

        match page.storage() {
            Some(storage) if !storage.is_empty() => {
                output.data("")?;
                output.data(storage)?;
            }
            _ => output.muted("\n(no content)"),
        }
        Ok(())
    }
}

/// Summary lines of a page.
fn page_lines(page: &Page) -> Vec<String> {
    let mut lines = vec![
        format!("{}: {}", page.id, page.title),
        format!("  Version: {}", page.version_number()),
    ];
    if let Some(status) = &page.status {
        lines.push(format!("  Status:  {status}"));
    }
    if let Some(space_id) = &page.space_id {
        lines.push(format!("  Space:   {space_id}"));
    }
    lines
}

fn attachment_line(attachment: &Attachment) -> String {
    format!(
        "  - {} (ID: {}, {}, {})",
        attachment.title,
        attachment.id,
        attachment.media_type(),
        format_file_size(attachment.file_size())
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_lines() {
        let page: Page = serde_json::from_str(
            r#"{"id": "42", "title": "Runbook", "status": "current",
                "spaceId": "9", "version": {"number": 3}}"#,
        )
        .unwrap();

        assert_eq!(
            page_lines(&page),
            vec![
                "42: Runbook",
                "  Version: 3",
                "  Status:  current",
                "  Space:   9",
            ]
        );
    }

    #[test]
    fn test_attachment_line() {
        let attachment: Attachment = serde_json::from_str(
            r#"{"id": "att7", "title": "chart.png",
                "extensions": {"mediaType": "image/png", "fileSize": 2048}}"#,
        )
        .unwrap();

        assert_eq!(
            attachment_line(&attachment),
            "  - chart.png (ID: att7, image/png, 2.0 KB)"
        );
    }
}
