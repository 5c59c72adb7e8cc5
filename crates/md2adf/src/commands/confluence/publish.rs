//! `md2adf confluence create` and `md2adf confluence update` command
//! implementations.

use std::path::{Path, PathBuf};

use clap::Args;
use md2adf_confluence::{Page, PageBody, PageDraft};
use md2adf_converter::convert;

use super::ConfluenceContext;
use crate::error::CliError;

/// Arguments for the confluence create command.
#[derive(Args)]
pub(crate) struct CreateArgs {
    /// Markdown file with the page content (`-` for stdin).
    file: PathBuf,

    /// Page title.
    #[arg(short, long)]
    title: String,

    /// Parent page ID (default: from config).
    #[arg(short, long)]
    parent: Option<String>,

    /// Send the file as Confluence storage format instead of markdown.
    #[arg(long)]
    storage: bool,

    /// File to attach; may be repeated.
    #[arg(short, long = "attach")]
    attach: Vec<PathBuf>,
}

impl CreateArgs {
    pub(crate) fn execute(self, ctx: &ConfluenceContext) -> Result<(), CliError> {
        let space = ctx.space()?;
        let space_id = match (&space.space_id, &space.space_key) {
            (Some(id), _) => id.clone(),
            (None, Some(key)) => ctx.client.find_space(key)?.id,
            (None, None) => {
                return Err(CliError::Validation(
                    "no Confluence space configured".to_owned(),
                ));
            }
        };

        let body = read_body(&self.file, self.storage)?;
        let mut draft = PageDraft::new(space_id, &self.title, body.clone());
        if let Some(parent) = self.parent.as_deref().or_else(|| ctx.parent_page_id()) {
            draft = draft.with_parent(parent);
        }

        let page = ctx.client.create_page(&draft)?;
        attach(ctx, &page, &self.title, &body, &self.attach)?;

        ctx.output
            .success(&format!("Created page {} (ID: {})", page.title, page.id));
        print_url(ctx, &page);
        Ok(())
    }
}

/// Arguments for the confluence update command.
#[derive(Args)]
pub(crate) struct UpdateArgs {
    /// Page ID.
    id: String,

    /// Markdown file with the new content (`-` for stdin).
    file: PathBuf,

    /// New title (default: keep the current one).
    #[arg(short, long)]
    title: Option<String>,

    /// Send the file as Confluence storage format instead of markdown.
    #[arg(long)]
    storage: bool,

    /// File to attach; may be repeated.
    #[arg(short, long = "attach")]
    attach: Vec<PathBuf>,
}

impl UpdateArgs {
    pub(crate) fn execute(self, ctx: &ConfluenceContext) -> Result<(), CliError> {
        let body = read_body(&self.file, self.storage)?;
        let current = ctx.client.get_page(&self.id)?;
        let title = self.title.unwrap_or_else(|| current.title.clone());

        let page = ctx
            .client
            .update_page(&self.id, &title, &body, current.version_number())?;
        attach(ctx, &page, &title, &body, &self.attach)?;

        ctx.output.success(&format!(
            "Updated page {} to version {}",
            page.id,
            page.version_number()
        ));
        print_url(ctx, &page);
        Ok(())
    }
}

/// Read page content; markdown is converted to ADF.
fn read_body(path: &Path, storage: bool) -> Result<PageBody, CliError> {
    let text = crate::input::read_text(Some(path))?;
    Ok(if storage {
        PageBody::Storage(text)
    } else {
        PageBody::Adf(convert(&text).to_adf())
    })
}

/// Upload attachments to a saved page. Storage bodies get their
/// `<attachment>` placeholders resolved afterwards.
fn attach(
    ctx: &ConfluenceContext,
    page: &Page,
    title: &str,
    body: &PageBody,
    files: &[PathBuf],
) -> Result<(), CliError> {
    if files.is_empty() {
        return Ok(());
    }
    match body {
        PageBody::Storage(storage) => {
            ctx.attach_to_storage_page(&page.id, title, storage, page.version_number(), files)?;
        }
        PageBody::Adf(_) => {
            ctx.upload_files(&page.id, files)?;
        }
    }
    Ok(())
}

fn print_url(ctx: &ConfluenceContext, page: &Page) {
    if let Some(url) = ctx.client.page_url(page) {
        ctx.output.info(&format!("URL: {url}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_body_converts_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.md");
        std::fs::write(&path, "# Title\n").unwrap();

        let body = read_body(&path, false).unwrap();
        assert_eq!(body.representation(), "atlas_doc_format");
    }

    #[test]
    fn test_read_body_storage_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.xhtml");
        std::fs::write(&path, "<p># not a heading</p>").unwrap();

        match read_body(&path, true).unwrap() {
            PageBody::Storage(text) => assert_eq!(text, "<p># not a heading</p>"),
            PageBody::Adf(_) => panic!("expected storage body"),
        }
    }
}
