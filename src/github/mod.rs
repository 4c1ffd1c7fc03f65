//! GitHub REST aggregation layer.
//!
//! Walks an issue's paginated, optionally-missing sub-resources (comments,
//! timeline, sub-issues, parent, README) and joins them into a single
//! immutable [`IssueThread`] with well-defined degradation rules.

mod client;
mod error;
pub mod models;
pub mod query;
pub mod resolve;
#[cfg(test)]
pub(crate) mod testing;
mod thread;

pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use query::{InvalidQuery, IssueLocator, parse_issue_query};
pub use resolve::{Resolution, fetch_readme, fetch_thread, update_issue_body};
pub use thread::{IssueThread, parent_locator};
