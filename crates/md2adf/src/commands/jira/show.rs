//! `md2adf jira show` command implementation.

use clap::Args;

use super::JiraContext;
use super::format::issue_lines;
use crate::error::CliError;

/// Arguments for the jira show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Issue key, e.g. OPS-12.
    key: String,
}

impl ShowArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let output = &ctx.output;
        let issue = ctx.client.get_issue(&self.key)?;

        for line in issue_lines(&issue) {
            output.data(&line)?;
        }
        output.data(&format!("  URL:      {}", ctx.client.browse_url(&issue.key)))?;

        match &issue.fields.description {
            Some(description) => {
                output.data("")?;
                output.data(&description.plain_text())?;
            }
            None => output.muted("\n(no description)"),
        }
        Ok(())
    }
}
