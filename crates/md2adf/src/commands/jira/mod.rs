//! `md2adf jira` subcommand group.

mod attach;
mod comment;
mod create;
mod format;
mod issues;
mod log_time;
mod show;
mod transition;
mod update;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use md2adf_config::{CliSettings, Config, JiraConfig};
use md2adf_jira::JiraClient;
use tracing::debug;

use attach::{AttachArgs, DownloadArgs};
use comment::CommentArgs;
use create::{CreateArgs, SubtaskArgs};
use issues::IssuesArgs;
use log_time::LogTimeArgs;
use show::ShowArgs;
use transition::TransitionArgs;
use update::UpdateArgs;

use crate::error::CliError;
use crate::output::Output;

/// Arguments shared by all Jira commands.
#[derive(Args)]
pub(crate) struct JiraArgs {
    #[command(subcommand)]
    command: JiraCommand,

    /// Path to configuration file (default: auto-discover md2adf.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Jira project key (overrides config).
    #[arg(long, global = true, env = "MD2ADF_PROJECT_KEY")]
    project_key: Option<String>,

    /// Enable verbose output (show API requests).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

/// Jira commands.
#[derive(Subcommand)]
enum JiraCommand {
    /// List project issues.
    Issues(IssuesArgs),
    /// Show one issue with its description.
    Show(ShowArgs),
    /// Create an issue.
    Create(CreateArgs),
    /// Create a subtask under an issue.
    Subtask(SubtaskArgs),
    /// Update an issue and optionally comment on it.
    Update(UpdateArgs),
    /// Comment on an issue.
    Comment(CommentArgs),
    /// Log work on an issue.
    LogTime(LogTimeArgs),
    /// Move an issue to another status, or list the available ones.
    Transition(TransitionArgs),
    /// Upload a file to an issue.
    Attach(AttachArgs),
    /// Download an attachment.
    Download(DownloadArgs),
}

impl JiraArgs {
    /// Execute the jira subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let ctx = JiraContext::load(self.config, self.project_key)?;

        match self.command {
            JiraCommand::Issues(args) => args.execute(&ctx),
            JiraCommand::Show(args) => args.execute(&ctx),
            JiraCommand::Create(args) => args.execute(&ctx),
            JiraCommand::Subtask(args) => args.execute(&ctx),
            JiraCommand::Update(args) => args.execute(&ctx),
            JiraCommand::Comment(args) => args.execute(&ctx),
            JiraCommand::LogTime(args) => args.execute(&ctx),
            JiraCommand::Transition(args) => args.execute(&ctx),
            JiraCommand::Attach(args) => args.execute(&ctx),
            JiraCommand::Download(args) => args.execute(&ctx),
        }
    }
}

/// Loaded configuration and an authenticated client.
pub(crate) struct JiraContext {
    config: Config,
    client: JiraClient,
    output: Output,
}

impl JiraContext {
    fn load(config_path: Option<PathBuf>, project_key: Option<String>) -> Result<Self, CliError> {
        let cli_settings = CliSettings {
            project_key,
            ..Default::default()
        };
        let config = Config::load(config_path.as_deref(), Some(&cli_settings))?;

        let credentials = config.resolve_credentials()?;
        debug!("Credentials loaded from {}", credentials.source);
        let client = JiraClient::new(
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

    /// Project settings, required by commands that create or list issues.
    fn project(&self) -> Result<&JiraConfig, CliError> {
        Ok(self.config.require_jira()?)
    }

    /// Account ID of the authenticated user.
    fn my_account_id(&self) -> Result<String, CliError> {
        Ok(self.client.myself()?.account_id)
    }
}
