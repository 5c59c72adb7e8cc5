//! md2adf CLI - Markdown to Atlassian Document Format.
//!
//! Provides commands for:
//! - `convert`: Print the ADF JSON of a markdown document
//! - `jira ...`: Work with Jira issues, sending markdown as ADF
//! - `confluence ...`: Search, read and publish Confluence pages

mod commands;
mod error;
mod input;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfluenceArgs, ConvertArgs, JiraArgs};
use output::Output;

/// md2adf - Markdown to Atlassian Document Format.
#[derive(Parser)]
#[command(name = "md2adf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert markdown to ADF JSON.
    Convert(ConvertArgs),
    /// Jira issue commands.
    Jira(JiraArgs),
    /// Confluence page commands.
    Confluence(ConfluenceArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::Convert(_) => false,
        Commands::Jira(args) => args.verbose,
        Commands::Confluence(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Jira(args) => args.execute(),
        Commands::Confluence(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
