//! `md2adf confluence` subcommand group.

mod download;
mod page;
mod publish;
mod search;
mod tables;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use md2adf_config::{CliSettings, Config, ConfluenceConfig};
use md2adf_confluence::{ConfluenceClient, PageBody, resolve_attachment_placeholders};
use md2adf_jira::{format_file_size, mime_type_for};
use tracing::debug;

use download::DownloadArgs;
use page::PageArgs;
use publish::{CreateArgs, UpdateArgs};
use search::SearchArgs;
use tables::TablesArgs;

use crate::error::CliError;
use crate::output::Output;

/// Arguments shared by all Confluence commands.
#[derive(Args)]
pub(crate) struct ConfluenceArgs {
    #[command(subcommand)]
    command: ConfluenceCommand,

    /// Path to configuration file (default: auto-discover md2adf.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Confluence space key (overrides config).
    #[arg(long, global = true, env = "MD2ADF_SPACE_KEY")]
    space_key: Option<String>,

    /// Parent page ID for new pages (overrides config).
    #[arg(long, global = true)]
    parent_page_id: Option<String>,

    /// Enable verbose output (show API requests).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

/// Confluence commands.
#[derive(Subcommand)]
enum ConfluenceCommand {
    /// Search pages by text.
    Search(SearchArgs),
    /// Show a page with its storage content and attachments.
    Page(PageArgs),
    /// Create a page from a markdown file.
    Create(CreateArgs),
    /// Replace the content of a page.
    Update(UpdateArgs),
    /// Print the tables of a page as JSON records.
    Tables(TablesArgs),
    /// Download a page attachment.
    Download(DownloadArgs),
}

impl ConfluenceArgs {
    /// Execute the confluence subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let ctx = ConfluenceContext::load(self.config, self.space_key, self.parent_page_id)?;

        match self.command {
            ConfluenceCommand::Search(args) => args.execute(&ctx),
            ConfluenceCommand::Page(args) => args.execute(&ctx),
            ConfluenceCommand::Create(args) => args.execute(&ctx),
            ConfluenceCommand::Update(args) => args.execute(&ctx),
            ConfluenceCommand::Tables(args) => args.execute(&ctx),
            ConfluenceCommand::Download(args) => args.execute(&ctx),
        }
    }
}

/// Loaded configuration and an authenticated client.
pub(crate) struct ConfluenceContext {
    config: Config,
    client: ConfluenceClient,
    output: Output,
}

impl ConfluenceContext {
    fn load(
        config_path: Option<PathBuf>,
        space_key: Option<String>,
        parent_page_id: Option<String>,
    ) -> Result<Self, CliError> {
        let cli_settings = CliSettings {
            confluence_space_key: space_key,
            confluence_parent_page_id: parent_page_id,
            ..Default::default()
        };
        let config = Config::load(config_path.as_deref(), Some(&cli_settings))?;

        let credentials = config.resolve_credentials()?;
        debug!("Credentials loaded from {}", credentials.source);
        let client = ConfluenceClient::new(
            &credentials.base_url,
            &credentials.email,
            &credentials.api_token,
        );

        Ok(Self {
            config,
            client,
            output: Output::new(),
        })
    }

    /// Space settings, required by commands that create pages.
    fn space(&self) -> Result<&ConfluenceConfig, CliError> {
        Ok(self.config.require_confluence_space()?)
    }

    /// Configured space key, used to narrow searches.
    fn space_key(&self) -> Option<&str> {
        self.config.confluence.as_ref()?.space_key.as_deref()
    }

    /// Configured parent page for new pages.
    fn parent_page_id(&self) -> Option<&str> {
        self.config.confluence.as_ref()?.parent_page_id.as_deref()
    }

    /// Upload files to a page, returning their attachment names.
    ///
    /// Every file is checked before the first upload.
    fn upload_files(&self, page_id: &str, files: &[PathBuf]) -> Result<Vec<String>, CliError> {
        for file in files {
            if !file.is_file() {
                return Err(CliError::Validation(format!(
                    "attachment not found: {}",
                    file.display()
                )));
            }
        }

        let mut names = Vec::with_capacity(files.len());
        for file in files {
            let filename = file_name(file)?;
            let data = std::fs::read(file)?;
            let attachment = self.client.add_attachment(
                page_id,
                &filename,
                &data,
                mime_type_for(Path::new(&filename)),
            )?;
            self.output.info(&format!(
                "Attached {} ({})",
                attachment.title,
                format_file_size(data.len() as u64)
            ));
            names.push(attachment.title);
        }
        Ok(names)
    }

    /// Upload files, then point `<attachment>` placeholders of a storage
    /// body at them and save the page again.
    fn attach_to_storage_page(
        &self,
        page_id: &str,
        title: &str,
        storage: &str,
        version: u32,
        files: &[PathBuf],
    ) -> Result<u32, CliError> {
        let names = self.upload_files(page_id, files)?;
        let resolved = resolve_attachment_placeholders(storage, &names);
        if resolved == storage {
            return Ok(version);
        }

        let body = PageBody::Storage(resolved);
        let page = self.client.update_page(page_id, title, &body, version)?;
        Ok(page.version_number())
    }
}

/// Final path component as UTF-8.
fn file_name(path: &Path) -> Result<String, CliError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToOwned::to_owned)
        .ok_or_else(|| CliError::Validation(format!("invalid file name: {}", path.display())))
}
