//! Workflow transition operations for Jira API.

use serde_json::json;
use tracing::info;

use super::JiraClient;
use crate::error::JiraError;
use crate::types::{Transition, TransitionsResponse};

impl JiraClient {
    /// List transitions available on an issue.
    pub fn get_transitions(&self, key: &str) -> Result<Vec<Transition>, JiraError> {
        let url = format!("{}/issue/{}/transitions", self.api_url(), key);

        info!("Getting transitions for issue {}", key);

        let response: TransitionsResponse = self.get_json(&url)?;
        Ok(response.transitions)
    }

    /// Move an issue through a transition.
    pub fn transition_issue(&self, key: &str, transition_id: &str) -> Result<(), JiraError> {
        let url = format!("{}/issue/{}/transitions", self.api_url(), key);

        info!("Transitioning issue {} (transition={})", key, transition_id);

        self.post_json(&url, &json!({ "transition": { "id": transition_id } }))?;
        Ok(())
    }
}
