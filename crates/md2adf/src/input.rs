//! Markdown input from files or stdin.

use std::io::{self, Read};
use std::path::Path;

use md2adf_converter::{Document, convert};

use crate::error::CliError;

/// Read text from `path`, or from stdin when `path` is `None` or `-`.
pub(crate) fn read_text(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Read and convert a markdown file.
pub(crate) fn read_document(path: &Path) -> Result<Document, CliError> {
    let markdown = std::fs::read_to_string(path)?;
    Ok(convert(&markdown))
}

/// Read and convert an optional markdown file.
pub(crate) fn read_optional_document(path: Option<&Path>) -> Result<Option<Document>, CliError> {
    path.map(read_document).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        std::fs::write(&path, "# Title\n").unwrap();

        assert_eq!(read_text(Some(&path)).unwrap(), "# Title\n");
    }

    #[test]
    fn test_read_optional_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desc.md");
        std::fs::write(&path, "- one\n- two\n").unwrap();

        let doc = read_optional_document(Some(&path)).unwrap().unwrap();
        assert_eq!(doc.blocks.len(), 1);
        assert!(read_optional_document(None).unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_document(Path::new("/nonexistent/desc.md")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
