//! `md2adf jira transition` command implementation.

use clap::Args;
use md2adf_jira::{JiraError, find_transition};

use super::JiraContext;
use crate::error::CliError;

/// Arguments for the jira transition command.
#[derive(Args)]
pub(crate) struct TransitionArgs {
    /// Issue key.
    key: String,

    /// Target transition name (case-insensitive). Lists transitions if omitted.
    status: Option<String>,
}

impl TransitionArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let output = &ctx.output;
        let transitions = ctx.client.get_transitions(&self.key)?;

        let Some(status) = &self.status else {
            output.highlight(&format!("Available transitions for {}:", self.key));
            for transition in &transitions {
                output.data(&format!("  - {} (ID: {})", transition.name, transition.id))?;
            }
            return Ok(());
        };

        let transition = find_transition(&transitions, status).ok_or_else(|| {
            let available: Vec<&str> = transitions.iter().map(|t| t.name.as_str()).collect();
            JiraError::NotFound(format!(
                "transition '{status}' not available for {}; available: {}",
                self.key,
                available.join(", ")
            ))
        })?;

        ctx.client.transition_issue(&self.key, &transition.id)?;
        output.success(&format!("Moved {} to {}", self.key, transition.name));
        Ok(())
    }
}
