//! `md2adf jira log-time` command implementation.

use std::path::PathBuf;

use clap::Args;
use md2adf_jira::parse_time_spent;

use super::JiraContext;
use crate::error::CliError;
use crate::input::read_optional_document;

/// Arguments for the jira log-time command.
#[derive(Args)]
pub(crate) struct LogTimeArgs {
    /// Issue key.
    key: String,

    /// Time spent, e.g. "2h 30m", "45m" or "1h".
    time: String,

    /// Markdown file with a worklog comment.
    #[arg(long)]
    comment_file: Option<PathBuf>,
}

impl LogTimeArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let seconds = parse_time_spent(&self.time).ok_or_else(|| {
            CliError::Validation(format!(
                "invalid time '{}': use a format like \"2h 30m\", \"45m\" or \"1h\"",
                self.time
            ))
        })?;
        let comment = read_optional_document(self.comment_file.as_deref())?;

        ctx.client
            .add_worklog(&self.key, seconds, comment.as_ref())?;
        ctx.output
            .success(&format!("Logged {} on {}", self.time.trim(), self.key));
        Ok(())
    }
}
