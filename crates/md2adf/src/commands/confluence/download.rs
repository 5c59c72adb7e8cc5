//! `md2adf confluence download` command implementation.

use std::path::PathBuf;

use clap::Args;
use md2adf_confluence::Attachment;
use md2adf_jira::format_file_size;

use super::ConfluenceContext;
use crate::error::CliError;

/// Arguments for the confluence download command.
#[derive(Args)]
pub(crate) struct DownloadArgs {
    /// Page the attachment belongs to.
    page_id: String,

    /// Attachment ID (see `md2adf confluence page`).
    attachment_id: String,

    /// Destination file, or a directory to keep the attachment's name.
    dest: PathBuf,
}

impl DownloadArgs {
    pub(crate) fn execute(self, ctx: &ConfluenceContext) -> Result<(), CliError> {
        let attachments = ctx.client.get_attachments(&self.page_id)?;
        let attachment = find_attachment(&attachments, &self.attachment_id, &self.page_id)?;

        let dest = if self.dest.is_dir() {
            self.dest.join(&attachment.title)
        } else {
            self.dest
        };

        let written = ctx.client.download_attachment(attachment, &dest)?;
        ctx.output.success(&format!(
            "Downloaded {} to {} ({})",
            attachment.title,
            dest.display(),
            format_file_size(written)
        ));
        Ok(())
    }
}

/// Pick an attachment by ID; the error lists what the page does have.
fn find_attachment<'a>(
    attachments: &'a [Attachment],
    id: &str,
    page_id: &str,
) -> Result<&'a Attachment, CliError> {
    attachments
        .iter()
        .find(|attachment| attachment.id == id)
        .ok_or_else(|| {
            let available = if attachments.is_empty() {
                "none".to_owned()
            } else {
                attachments
                    .iter()
                    .map(|a| format!("{} (ID: {})", a.title, a.id))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            CliError::Validation(format!(
                "attachment {id} not found on page {page_id}. Available: {available}"
            ))
        })
}
