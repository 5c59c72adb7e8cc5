//! Jira Cloud REST API client.
//!
//! Provides sync HTTP client for Jira Cloud REST API v3
//! with API token (basic) authentication.

mod attachments;
mod comments;
mod issues;
mod transitions;
mod users;
mod worklogs;

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde_json::Value;
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::error::JiraError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Jira REST API client.
pub struct JiraClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl JiraClient {
    /// Create client for a Jira Cloud site.
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

    /// Site URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Browser URL of an issue.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/rest/api/3", self.base_url)
    }

    /// GET a JSON resource.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, JiraError> {
        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        Ok(check_status(response)?.read_json()?)
    }

    /// POST a JSON payload and return the response body.
    fn post_json(&self, url: &str, payload: &Value) -> Result<Body, JiraError> {
        let response = self
            .agent
            .post(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send_json(payload)?;

        check_status(response)
    }

    /// PUT a JSON payload, discarding the response body.
    fn put_json(&self, url: &str, payload: &Value) -> Result<(), JiraError> {
        let response = self
            .agent
            .put(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send_json(payload)?;

        check_status(response)?;
        Ok(())
    }
}

/// Turn error statuses into [`JiraError::HttpResponse`].
fn check_status(response: Response<Body>) -> Result<Body, JiraError> {
    let status = response.status().as_u16();
    let mut body = response.into_body();

    if status >= 400 {
        let error_body = body
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(JiraError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let client = JiraClient::new("https://acme.atlassian.net/", "dev@acme.com", "secret");
        assert_eq!(
            client.auth_header,
            format!("Basic {}", STANDARD.encode("dev@acme.com:secret"))
        );
    }

    #[test]
    fn test_urls() {
        let client = JiraClient::new("https://acme.atlassian.net/", "a", "b");
        assert_eq!(client.base_url(), "https://acme.atlassian.net");
        assert_eq!(client.api_url(), "https://acme.atlassian.net/rest/api/3");
        assert_eq!(
            client.browse_url("OPS-1"),
            "https://acme.atlassian.net/browse/OPS-1"
        );
    }
}
