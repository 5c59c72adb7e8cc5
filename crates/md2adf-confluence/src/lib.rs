//! Confluence integration for md2adf.
//!
//! This crate provides:
//! - [`ConfluenceClient`]: sync REST API client for Confluence Cloud with
//!   API token authentication
//! - [`PageBody`]: page content either as converted markdown (ADF) or as
//!   raw storage format
//! - [`extract_tables`]: table rows of a storage-format page as
//!   header-keyed records
//!
//! # API Client
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use md2adf_confluence::{ConfluenceClient, PageBody, PageDraft};
//! use md2adf_converter::convert;
//!
//! let client = ConfluenceClient::new(
//!     "https://acme.atlassian.net",
//!     "dev@acme.com",
//!     "api-token",
//! );
//!
//! let space = client.find_space("ENG")?;
//! let body = PageBody::Adf(convert("# Runbook\n\n- restart **api**").to_adf());
//! let page = client.create_page(&PageDraft::new(space.id, "Runbook", body))?;
//! println!("Created {}", page.id);
//! # Ok(())
//! # }
//! ```

// API client
mod client;
pub use client::ConfluenceClient;

// Request payloads
mod body;
pub use body::{PageBody, PageDraft};

// Response types
mod types;
pub use types::{Attachment, Page, Space};

// Storage format helpers
mod placeholders;
mod tables;
pub use placeholders::resolve_attachment_placeholders;
pub use tables::{PageTables, extract_tables, storage_text};

// Errors
pub mod error;
pub use error::ConfluenceError;
