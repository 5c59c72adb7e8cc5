//! `md2adf confluence search` command implementation.

use clap::Args;

use super::ConfluenceContext;
use crate::error::CliError;

/// Arguments for the confluence search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Text to search for.
    query: String,

    /// Maximum number of results.
    #[arg(short, long, default_value_t = 10)]
    limit: u32,
}

impl SearchArgs {
    pub(crate) fn execute(self, ctx: &ConfluenceContext) -> Result<(), CliError> {
        let output = &ctx.output;
        let pages = ctx
            .client
            .search_pages(&self.query, ctx.space_key(), self.limit)?;

        if pages.is_empty() {
            output.muted("No pages found");
            return Ok(());
        }

        for page in &pages {
            output.data(&format!("{}  {}", page.id, page.title))?;
            if let Some(url) = ctx.client.page_url(page) {
                output.data(&format!("    {url}"))?;
            }
        }
        Ok(())
    }
}
