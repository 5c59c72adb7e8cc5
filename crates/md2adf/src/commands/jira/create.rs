//! `md2adf jira create` and `md2adf jira subtask` command implementations.

use std::path::PathBuf;

use clap::Args;
use md2adf_jira::{CreatedIssue, IssueDraft};

use super::JiraContext;
use crate::error::CliError;
use crate::input::read_optional_document;

/// Issue type used for subtasks.
const SUBTASK_TYPE: &str = "Sub-task";

/// Arguments for the jira create command.
#[derive(Args)]
pub(crate) struct CreateArgs {
    /// Issue summary.
    #[arg(short, long)]
    summary: String,

    /// Issue type (default: from config, usually Task).
    #[arg(short = 't', long = "type")]
    issue_type: Option<String>,

    /// Markdown file with the description.
    #[arg(short, long)]
    description_file: Option<PathBuf>,

    /// Epic to link the issue to (default: from config).
    #[arg(short, long)]
    epic: Option<String>,

    /// Assign the issue to yourself.
    #[arg(long)]
    assign_to_me: bool,
}

impl CreateArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let project = ctx.project()?;

        let issue_type = self
            .issue_type
            .unwrap_or_else(|| project.default_issue_type.clone());
        let epic = self.epic.or_else(|| project.default_epic.clone());

        let mut draft = IssueDraft::new(&project.project_key, self.summary, issue_type);
        if let Some(epic) = &epic {
            draft = draft.with_parent(epic);
        }

        let created = submit(
            ctx,
            draft,
            self.description_file.as_deref(),
            self.assign_to_me,
        )?;

        let under = epic.map(|e| format!(" (under {e})")).unwrap_or_default();
        print_created(ctx, "issue", &created, &under);
        Ok(())
    }
}

/// Arguments for the jira subtask command.
#[derive(Args)]
pub(crate) struct SubtaskArgs {
    /// Parent issue key.
    parent: String,

    /// Subtask summary.
    #[arg(short, long)]
    summary: String,

    /// Markdown file with the description.
    #[arg(short, long)]
    description_file: Option<PathBuf>,

    /// Assign the subtask to yourself.
    #[arg(long)]
    assign_to_me: bool,
}

impl SubtaskArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let project = ctx.project()?;

        let draft = IssueDraft::new(&project.project_key, self.summary, SUBTASK_TYPE)
            .with_parent(&self.parent);

        let created = submit(
            ctx,
            draft,
            self.description_file.as_deref(),
            self.assign_to_me,
        )?;

        print_created(ctx, "subtask", &created, &format!(" (under {})", self.parent));
        Ok(())
    }
}

/// Fill in description and assignee, then create the issue.
fn submit(
    ctx: &JiraContext,
    mut draft: IssueDraft,
    description_file: Option<&std::path::Path>,
    assign_to_me: bool,
) -> Result<CreatedIssue, CliError> {
    if let Some(description) = read_optional_document(description_file)? {
        draft = draft.with_description(description);
    }
    if assign_to_me {
        draft = draft.with_assignee(ctx.my_account_id()?);
    }
    Ok(ctx.client.create_issue(&draft)?)
}

fn print_created(ctx: &JiraContext, what: &str, created: &CreatedIssue, suffix: &str) {
    ctx.output
        .success(&format!("Created {what} {}{suffix}", created.key));
    ctx.output
        .info(&format!("URL: {}", ctx.client.browse_url(&created.key)));
}
