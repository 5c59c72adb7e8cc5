//! `md2adf convert` command implementation.

use std::path::PathBuf;

use clap::Args;
use md2adf_converter::convert;

use crate::error::CliError;
use crate::input::read_text;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Markdown file to convert (default: stdin).
    file: Option<PathBuf>,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let markdown = read_text(self.file.as_deref())?;
        let json = render(&markdown, self.compact)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{json}\n"))?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.data(&json)?,
        }
        Ok(())
    }
}

/// Convert markdown and serialize the ADF document.
fn render(markdown: &str, compact: bool) -> Result<String, CliError> {
    let adf = convert(markdown).to_adf();
    let json = if compact {
        serde_json::to_string(&adf)?
    } else {
        serde_json::to_string_pretty(&adf)?
    };
    Ok(json)
}
