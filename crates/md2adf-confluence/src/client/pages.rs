//! Page and space operations for Confluence API.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::info;

use super::ConfluenceClient;
use crate::body::{PageBody, PageDraft, update_payload};
use crate::error::ConfluenceError;
use crate::types::{Page, PagesResponse, Space, SpacesResponse};

impl ConfluenceClient {
    /// Full-text search for pages, optionally within one space.
    pub fn search_pages(
        &self,
        query: &str,
        space_key: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Page>, ConfluenceError> {
        let cql = search_cql(query, space_key);
        let url = format!(
            "{}/content/search?cql={}&limit={}",
            self.api_v1_url(),
            utf8_percent_encode(&cql, NON_ALPHANUMERIC),
            limit
        );

        info!("Searching pages: {}", cql);

        let response: PagesResponse = self.get_json(&url)?;
        info!("Found {} pages", response.results.len());
        Ok(response.results)
    }

    /// Get page with its storage-format body.
    pub fn get_page(&self, page_id: &str) -> Result<Page, ConfluenceError> {
        let url = format!("{}/pages/{}?body-format=storage", self.api_v2_url(), page_id);

        info!("Getting page {}", page_id);

        self.get_json(&url)
    }

    /// Look up a space by key.
    pub fn find_space(&self, key: &str) -> Result<Space, ConfluenceError> {
        let url = format!(
            "{}/spaces?keys={}",
            self.api_v2_url(),
            utf8_percent_encode(key, NON_ALPHANUMERIC)
        );

        info!("Looking up space {}", key);

        let response: SpacesResponse = self.get_json(&url)?;
        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ConfluenceError::NotFound(format!("space {key} not found")))
    }

    /// Create a new page.
    pub fn create_page(&self, draft: &PageDraft) -> Result<Page, ConfluenceError> {
        let url = format!("{}/pages", self.api_v2_url());

        info!(
            "Creating page '{}' in space {} ({})",
            draft.title,
            draft.space_id,
            draft.body.representation()
        );

        let page: Page = self.post_json(&url, &draft.to_payload()?)?;
        info!("Created page {}", page.id);
        Ok(page)
    }

    /// Replace title and content of a page.
    ///
    /// `current_version` is the version being replaced; the new version is
    /// one higher.
    pub fn update_page(
        &self,
        page_id: &str,
        title: &str,
        body: &PageBody,
        current_version: u32,
    ) -> Result<Page, ConfluenceError> {
        let url = format!("{}/pages/{}", self.api_v2_url(), page_id);

        info!(
            "Updating page {} to version {}",
            page_id,
            current_version + 1
        );

        let payload = update_payload(page_id, title, body, current_version)?;
        self.put_json(&url, &payload)
    }
}

/// CQL for a text search, quotes in the query escaped.
fn search_cql(query: &str, space_key: Option<&str>) -> String {
    let text = query.replace('\\', "\\\\").replace('"', "\\\"");
    match space_key {
        Some(space) => format!(r#"text ~ "{text}" AND space = "{space}""#),
        None => format!(r#"text ~ "{text}""#),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_cql() {
        assert_eq!(search_cql("deploy", None), r#"text ~ "deploy""#);
        assert_eq!(
            search_cql("deploy", Some("ENG")),
            r#"text ~ "deploy" AND space = "ENG""#
        );
    }

    #[test]
    fn test_search_cql_escapes_quotes() {
        assert_eq!(
            search_cql(r#"say "hi""#, None),
            r#"text ~ "say \"hi\"""#
        );
    }
}
