//! Confluence attachment types.

use serde::Deserialize;

/// Confluence attachment.
///
/// v1 responses nest media type and size under `extensions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Attachment ID.
    pub id: String,
    /// Attachment title/filename.
    pub title: String,
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    file_size: Option<u64>,
    #[serde(default)]
    extensions: Option<Extensions>,
    #[serde(rename = "_links", default)]
    links: AttachmentLinks,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Extensions {
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    file_size: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AttachmentLinks {
    #[serde(default)]
    download: Option<String>,
}

impl Attachment {
    /// MIME type, `application/octet-stream` when unknown.
    pub fn media_type(&self) -> &str {
        self.media_type
            .as_deref()
            .or_else(|| self.extensions.as_ref()?.media_type.as_deref())
            .unwrap_or("application/octet-stream")
    }

    /// Size in bytes, 0 when unknown.
    pub fn file_size(&self) -> u64 {
        self.file_size
            .or_else(|| self.extensions.as_ref()?.file_size)
            .unwrap_or(0)
    }

    /// Download path relative to the wiki base URL.
    pub fn download_path(&self) -> Option<&str> {
        self.links.download.as_deref()
    }
}

/// Attachments API response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AttachmentsResponse {
    /// List of attachments.
    pub(crate) results: Vec<Attachment>,
}
