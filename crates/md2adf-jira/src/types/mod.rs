//! Jira API types.

mod attachment;
mod issue;
mod transition;
mod user;

pub use attachment::Attachment;
pub use issue::{Comment, CreatedIssue, Issue, IssueFields, Named, SearchResult, Worklog};
pub(crate) use issue::SearchResponse;
pub use transition::{Transition, find_transition};
pub(crate) use transition::TransitionsResponse;
pub use user::User;
