//! `md2adf confluence tables` command implementation.

use clap::Args;
use md2adf_confluence::{PageTables, extract_tables};

use super::ConfluenceContext;
use crate::error::CliError;

/// Arguments for the confluence tables command.
#[derive(Args)]
pub(crate) struct TablesArgs {
    /// Page ID.
    id: String,
}

impl TablesArgs {
    pub(crate) fn execute(self, ctx: &ConfluenceContext) -> Result<(), CliError> {
        let page = ctx.client.get_page(&self.id)?;
        let storage = page
            .storage()
            .ok_or_else(|| CliError::Validation(format!("page {} has no content", page.id)))?;

        let tables = PageTables {
            tables: extract_tables(storage),
            page_id: page.id.clone(),
            page_title: page.title.clone(),
        };
        if tables.tables.is_empty() {
            ctx.output.muted("No tables found");
        }

        ctx.output.data(&serde_json::to_string_pretty(&tables)?)?;
        Ok(())
    }
}
