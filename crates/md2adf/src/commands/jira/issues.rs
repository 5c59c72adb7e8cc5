//! `md2adf jira issues` command implementation.

use clap::{Args, ValueEnum};
use md2adf_jira::IssueFilter;

use super::JiraContext;
use super::format::issue_lines;
use crate::error::CliError;

/// Issue list filters.
#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Assigned to me.
    Mine,
    /// Not done or closed.
    Open,
    /// Updated in the last 7 days.
    Recent,
    /// Use --jql.
    Custom,
}

/// Arguments for the jira issues command.
#[derive(Args)]
pub(crate) struct IssuesArgs {
    /// Which issues to list.
    #[arg(long, value_enum, default_value_t = FilterArg::Mine)]
    filter: FilterArg,

    /// JQL for the custom filter (project scope is added automatically).
    #[arg(long)]
    jql: Option<String>,

    /// Maximum number of issues.
    #[arg(short, long, default_value_t = 20)]
    limit: u32,
}

impl IssuesArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let output = &ctx.output;
        let project = ctx.project()?;

        let filter = match self.filter {
            FilterArg::Mine => IssueFilter::Mine,
            FilterArg::Open => IssueFilter::Open,
            FilterArg::Recent => IssueFilter::Recent,
            FilterArg::Custom => IssueFilter::Custom(self.jql.clone()),
        };
        if self.jql.is_some() && !matches!(filter, IssueFilter::Custom(_)) {
            output.warning("--jql is only used with --filter custom");
        }

        let result = ctx
            .client
            .search_issues(&filter.jql(&project.project_key), self.limit)?;

        if result.issues.is_empty() {
            output.info("No issues found.");
            return Ok(());
        }

        output.highlight(&format!(
            "Found {} issues (showing {}):",
            result.total,
            result.issues.len()
        ));
        for issue in &result.issues {
            output.separator();
            for line in issue_lines(issue) {
                output.data(&line)?;
            }
        }
        Ok(())
    }
}
