//! Confluence space types.

use serde::Deserialize;

/// Confluence space.
#[derive(Debug, Clone, Deserialize)]
pub struct Space {
    /// Space ID, used when creating pages.
    pub id: String,
    /// Space key.
    pub key: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Spaces API response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SpacesResponse {
    #[serde(default)]
    pub(crate) results: Vec<Space>,
}
