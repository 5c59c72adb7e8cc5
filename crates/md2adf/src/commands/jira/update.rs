//! `md2adf jira update` command implementation.

use std::path::PathBuf;

use clap::Args;
use md2adf_jira::IssueUpdate;

use super::JiraContext;
use crate::error::CliError;
use crate::input::read_optional_document;

/// Arguments for the jira update command.
#[derive(Args)]
pub(crate) struct UpdateArgs {
    /// Issue key.
    key: String,

    /// New summary.
    #[arg(short, long)]
    summary: Option<String>,

    /// Markdown file with the new description.
    #[arg(short, long)]
    description_file: Option<PathBuf>,

    /// Markdown file with a comment to add.
    #[arg(long)]
    comment_file: Option<PathBuf>,

    /// Epic to link the issue to.
    #[arg(short, long)]
    epic: Option<String>,
}

impl UpdateArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let output = &ctx.output;

        let update = IssueUpdate {
            summary: self.summary,
            description: read_optional_document(self.description_file.as_deref())?,
            parent_key: self.epic,
        };
        let comment = read_optional_document(self.comment_file.as_deref())?;

        if update.is_empty() && comment.is_none() {
            return Err(CliError::Validation(
                "nothing to update: pass --summary, --description-file, --epic or --comment-file"
                    .to_owned(),
            ));
        }

        let mut changes = Vec::new();
        if update.summary.is_some() {
            changes.push("summary");
        }
        if update.description.is_some() {
            changes.push("description");
        }
        if update.parent_key.is_some() {
            changes.push("epic");
        }

        ctx.client.update_issue(&self.key, &update)?;

        if let Some(comment) = &comment {
            ctx.client.add_comment(&self.key, comment)?;
            changes.push("comment");
        }

        output.success(&format!("Updated {}: {}", self.key, changes.join(", ")));
        Ok(())
    }
}
