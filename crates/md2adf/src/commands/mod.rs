//! CLI command implementations.

pub(crate) mod confluence;
pub(crate) mod convert;
pub(crate) mod jira;

pub(crate) use confluence::ConfluenceArgs;
pub(crate) use convert::ConvertArgs;
pub(crate) use jira::JiraArgs;
