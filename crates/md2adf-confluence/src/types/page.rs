//! Confluence page types.

use serde::Deserialize;

/// Confluence page.
///
/// Deserializes both v1 search results and v2 page responses; fields only
/// one of them carries are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    /// Page title.
    pub title: String,
    /// Content status, e.g. `current`.
    #[serde(default)]
    pub status: Option<String>,
    /// Space ID (v2 only).
    #[serde(rename = "spaceId", default)]
    pub space_id: Option<String>,
    /// Version information.
    #[serde(default)]
    pub version: Option<Version>,
    /// Page body content.
    #[serde(default)]
    pub body: Option<Body>,
    /// Hypermedia links.
    #[serde(rename = "_links", default)]
    pub links: Option<Links>,
}

impl Page {
    /// Current version number, 1 when the response omits it.
    pub fn version_number(&self) -> u32 {
        self.version.as_ref().map_or(1, |v| v.number)
    }

    /// Storage format content, if the body was requested.
    pub fn storage(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| body.storage.as_ref())
            .map(|storage| storage.value.as_str())
    }
}

/// Page version.
#[derive(Debug, Clone, Deserialize)]
pub struct Version {
    /// Version number.
    pub number: u32,
}

/// Page body content.
#[derive(Debug, Clone, Deserialize)]
pub struct Body {
    /// Storage format content.
    #[serde(default)]
    pub storage: Option<Storage>,
}

/// Storage format representation.
#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    /// HTML content in Confluence storage format.
    pub value: String,
}

/// Hypermedia links.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    /// Web UI path, relative to `base`.
    #[serde(default)]
    pub webui: Option<String>,
    /// Wiki base URL (v1 only).
    #[serde(default)]
    pub base: Option<String>,
}

/// Search API response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PagesResponse {
    #[serde(default)]
    pub(crate) results: Vec<Page>,
}
