//! Jira integration for md2adf.
//!
//! This crate provides:
//! - [`JiraClient`]: sync REST API client for Jira Cloud (API v3) with
//!   API token authentication
//! - [`IssueDraft`] and [`IssueUpdate`]: request payloads whose rich-text
//!   fields are converted from markdown to ADF
//! - [`IssueFilter`]: project-scoped JQL presets
//! - helpers for worklog durations, MIME types and file sizes
//!
//! # API Client
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use md2adf_converter::convert;
//! use md2adf_jira::{IssueDraft, JiraClient};
//!
//! let client = JiraClient::new(
//!     "https://acme.atlassian.net",
//!     "dev@acme.com",
//!     "api-token",
//! );
//!
//! let draft = IssueDraft::new("OPS", "Rotate certificates", "Task")
//!     .with_description(convert("- **staging** first\n- then prod"));
//! let created = client.create_issue(&draft)?;
//! println!("Created {}", created.key);
//! # Ok(())
//! # }
//! ```

// API client
mod client;
pub use client::JiraClient;

// Request payloads
mod payload;
pub use payload::{IssueDraft, IssueUpdate};

// Response types
mod types;
pub use types::{
    Attachment, Comment, CreatedIssue, Issue, IssueFields, Named, SearchResult, Transition, User,
    Worklog, find_transition,
};

// Helpers
mod duration;
mod filter;
mod mime;
pub use duration::parse_time_spent;
pub use filter::IssueFilter;
pub use mime::{format_file_size, mime_type_for};

// Errors
pub mod error;
pub use error::JiraError;
