//! Page request payloads.

use md2adf_converter::AdfDocument;
use serde_json::{Value, json};

/// Page content in one of the representations Confluence accepts.
#[derive(Debug, Clone)]
pub enum PageBody {
    /// Atlassian Document Format, e.g. converted markdown.
    Adf(AdfDocument),
    /// Confluence storage format (XHTML).
    Storage(String),
}

impl PageBody {
    /// Representation name used by the v2 API.
    pub fn representation(&self) -> &'static str {
        match self {
            Self::Adf(_) => "atlas_doc_format",
            Self::Storage(_) => "storage",
        }
    }

    /// `body` object of a page request. ADF is sent as a JSON string.
    pub(crate) fn to_payload(&self) -> Result<Value, serde_json::Error> {
        let value = match self {
            Self::Adf(adf) => serde_json::to_string(adf)?,
            Self::Storage(storage) => storage.clone(),
        };
        Ok(json!({
            "representation": self.representation(),
            "value": value,
        }))
    }
}

/// Fields of a new page.
#[derive(Debug, Clone)]
pub struct PageDraft {
    /// Space ID.
    pub space_id: String,
    /// Page title.
    pub title: String,
    /// Page content.
    pub body: PageBody,
    /// Parent page ID.
    pub parent_id: Option<String>,
}

impl PageDraft {
    /// Draft at the top level of a space.
    pub fn new(space_id: impl Into<String>, title: impl Into<String>, body: PageBody) -> Self {
        Self {
            space_id: space_id.into(),
            title: title.into(),
            body,
            parent_id: None,
        }
    }

    /// Nest the page under a parent.
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Body of `POST /pages`.
    pub(crate) fn to_payload(&self) -> Result<Value, serde_json::Error> {
        let mut payload = json!({
            "spaceId": self.space_id,
            "title": self.title,
            "status": "current",
            "body": self.body.to_payload()?,
        });
        if let Some(parent) = &self.parent_id {
            payload["parentId"] = json!(parent);
        }
        Ok(payload)
    }
}

/// Body of `PUT /pages/{id}`, bumping `current_version` by one.
pub(crate) fn update_payload(
    page_id: &str,
    title: &str,
    body: &PageBody,
    current_version: u32,
) -> Result<Value, serde_json::Error> {
    Ok(json!({
        "id": page_id,
        "status": "current",
        "title": title,
        "body": body.to_payload()?,
        "version": { "number": current_version + 1 },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use md2adf_converter::convert;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_storage_draft() {
        let draft = PageDraft::new("98304", "Notes", PageBody::Storage("<p>x</p>".to_owned()))
            .with_parent("42");
        assert_eq!(
            draft.to_payload().unwrap(),
            json!({
                "spaceId": "98304",
                "title": "Notes",
                "status": "current",
                "body": { "representation": "storage", "value": "<p>x</p>" },
                "parentId": "42"
            })
        );
    }

    #[test]
    fn test_adf_body_is_json_string() {
        let body = PageBody::Adf(convert("hi").to_adf());
        let payload = body.to_payload().unwrap();
        assert_eq!(payload["representation"], "atlas_doc_format");
        let value: Value = serde_json::from_str(payload["value"].as_str().unwrap()).unwrap();
        assert_eq!(value["type"], "doc");
        assert_eq!(value["content"][0]["content"][0]["text"], "hi");
    }

    #[test]
    fn test_update_bumps_version() {
        let payload =
            update_payload("7", "Title", &PageBody::Storage(String::new()), 3).unwrap();
        assert_eq!(payload["version"]["number"], 4);
        assert_eq!(payload["id"], "7");
    }
}
