//! Confluence Cloud REST API client.
//!
//! Provides sync HTTP client for Confluence Cloud with API token (basic)
//! authentication. Page operations use the v2 API; search and attachments
//! use v1, which has no v2 equivalent for them.

mod attachments;
mod pages;

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde_json::Value;
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::error::ConfluenceError;
use crate::types::Page;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Confluence REST API client.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl ConfluenceClient {
    /// Create client for an Atlassian Cloud site.
    ///
    /// # Arguments
    /// * `base_url` - site URL, e.g. `https://acme.atlassian.net`
    /// * `email` - account email
    /// * `api_token` - API token of that account
    pub fn new(base_url: &str, email: &str, api_token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        let token = STANDARD.encode(format!("{email}:{api_token}"));

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_header: format!("Basic {token}"),
        }
    }

    /// Browser URL of a page, if the response carried a web UI link.
    pub fn page_url(&self, page: &Page) -> Option<String> {
        let links = page.links.as_ref()?;
        let webui = links.webui.as_deref()?;
        let base = links.base.clone().unwrap_or_else(|| self.wiki_url());
        Some(format!("{base}{webui}"))
    }

    /// Wiki root URL.
    fn wiki_url(&self) -> String {
        format!("{}/wiki", self.base_url)
    }

    /// Get the v1 REST API base URL.
    fn api_v1_url(&self) -> String {
        format!("{}/wiki/rest/api", self.base_url)
    }

    /// Get the v2 REST API base URL.
    fn api_v2_url(&self) -> String {
        format!("{}/wiki/api/v2", self.base_url)
    }

    /// GET a JSON resource.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ConfluenceError> {
        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        Ok(check_status(response)?.read_json()?)
    }

    /// POST a JSON payload and parse the response.
    fn post_json<T: DeserializeOwned>(&self, url: &str, payload: &Value) -> Result<T, ConfluenceError> {
        let response = self
            .agent
            .post(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send_json(payload)?;

        Ok(check_status(response)?.read_json()?)
    }

    /// PUT a JSON payload and parse the response.
    fn put_json<T: DeserializeOwned>(&self, url: &str, payload: &Value) -> Result<T, ConfluenceError> {
        let response = self
            .agent
            .put(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send_json(payload)?;

        Ok(check_status(response)?.read_json()?)
    }
}

/// Turn error statuses into [`ConfluenceError::HttpResponse`].
fn check_status(response: Response<Body>) -> Result<Body, ConfluenceError> {
    let status = response.status().as_u16();
    let mut body = response.into_body();

    if status >= 400 {
        let error_body = body
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(ConfluenceError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ConfluenceClient {
        ConfluenceClient::new("https://acme.atlassian.net/", "dev@acme.com", "secret")
    }

    #[test]
    fn test_api_urls() {
        let client = client();
        assert_eq!(client.api_v1_url(), "https://acme.atlassian.net/wiki/rest/api");
        assert_eq!(client.api_v2_url(), "https://acme.atlassian.net/wiki/api/v2");
    }

    #[test]
    fn test_page_url_falls_back_to_wiki_root() {
        let page: Page = serde_json::from_str(
            r#"{"id": "1", "title": "A", "_links": {"webui": "/spaces/ENG/pages/1/A"}}"#,
        )
        .unwrap();
        assert_eq!(
            client().page_url(&page).as_deref(),
            Some("https://acme.atlassian.net/wiki/spaces/ENG/pages/1/A")
        );
    }

    #[test]
    fn test_page_url_uses_response_base() {
        let page: Page = serde_json::from_str(
            r#"{"id": "1", "title": "A", "_links": {"webui": "/x", "base": "https://other.net/wiki"}}"#,
        )
        .unwrap();
        assert_eq!(
            client().page_url(&page).as_deref(),
            Some("https://other.net/wiki/x")
        );
    }
}
