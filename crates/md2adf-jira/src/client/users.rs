//! User operations for Jira API.

use tracing::info;

use super::JiraClient;
use crate::error::JiraError;
use crate::types::User;

impl JiraClient {
    /// Get the authenticated user.
    pub fn myself(&self) -> Result<User, JiraError> {
        let url = format!("{}/myself", self.api_url());

        info!("Getting current user");

        self.get_json(&url)
    }
}
