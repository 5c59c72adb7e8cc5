//! `md2adf jira attach` and `md2adf jira download` command implementations.

use std::path::{Path, PathBuf};

use clap::Args;
use md2adf_jira::{format_file_size, mime_type_for};

use super::JiraContext;
use crate::error::CliError;

/// Arguments for the jira attach command.
#[derive(Args)]
pub(crate) struct AttachArgs {
    /// Issue key.
    key: String,

    /// File to upload.
    file: PathBuf,

    /// Attachment name (default: the file name).
    #[arg(short, long)]
    name: Option<String>,
}

impl AttachArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let filename = match self.name {
            Some(name) => name,
            None => file_name(&self.file)?,
        };
        let data = std::fs::read(&self.file)?;
        let mime_type = mime_type_for(Path::new(&filename));

        let attachment = ctx
            .client
            .add_attachment(&self.key, &filename, &data, mime_type)?;

        ctx.output.success(&format!(
            "Attached {} to {} (ID: {}, {})",
            attachment.filename,
            self.key,
            attachment.id,
            format_file_size(attachment.size)
        ));
        Ok(())
    }
}

/// Arguments for the jira download command.
#[derive(Args)]
pub(crate) struct DownloadArgs {
    /// Attachment ID (see `md2adf jira show`).
    id: String,

    /// Destination file, or a directory to keep the attachment's name.
    dest: PathBuf,
}

impl DownloadArgs {
    pub(crate) fn execute(self, ctx: &JiraContext) -> Result<(), CliError> {
        let attachment = ctx.client.get_attachment(&self.id)?;
        let dest = if self.dest.is_dir() {
            self.dest.join(&attachment.filename)
        } else {
            self.dest
        };

        let written = ctx.client.download_attachment(&attachment, &dest)?;
        ctx.output.success(&format!(
            "Downloaded {} to {} ({})",
            attachment.filename,
            dest.display(),
            format_file_size(written)
        ));
        Ok(())
    }
}

/// Final path component as UTF-8.
fn file_name(path: &Path) -> Result<String, CliError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToOwned::to_owned)
        .ok_or_else(|| CliError::Validation(format!("invalid file name: {}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name(Path::new("/tmp/report.pdf")).unwrap(),
            "report.pdf"
        );
        assert!(file_name(Path::new("/")).is_err());
    }
}
