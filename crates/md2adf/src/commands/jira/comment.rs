//! `md2adf jira comment` command implementation.

use std::path::PathBuf;

use clap::Args;
use md2adf_converter::convert;

use super::JiraContext;
use crate::error::CliError;
use crate::input::read_text;

/// Arguments for the jira comment command.
#[derive(Args)]
pub(crate) struct CommentArgs {
    /// Issue key.
    key: String,

    /// Markdown file with the comment (default: stdin).
    file: Option<PathBuf>,
}

impl CommentArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let body = convert(&read_text(self.file.as_deref())?);
        if body.is_empty() {
            return Err(CliError::Validation("comment is empty".to_owned()));
        }

        let comment = ctx.client.add_comment(&self.key, &body)?;
        ctx.output
            .success(&format!("Added comment {} to {}", comment.id, self.key));
        Ok(())
    }
}
