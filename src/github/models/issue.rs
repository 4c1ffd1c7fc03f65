use serde::Deserialize;

use super::Actor;

/// Primary issue record as returned by `GET /repos/{owner}/{repo}/issues/{n}`.
///
/// Collection URLs (`comments_url`, `timeline_url`) are followed as-is so the
/// resolvers stay agnostic of how the API host structures its paths.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub user: Actor,
    pub html_url: String,
    pub state: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub comments_url: String,
    #[serde(default)]
    pub timeline_url: Option<String>,
    #[serde(default)]
    pub sub_issues_summary: Option<SubIssuesSummary>,
    /// Inline parent object. Kept as raw JSON because the sub-issue API
    /// surface is preview-only; an unrecognized shape must degrade instead
    /// of failing the whole issue fetch.
    #[serde(default)]
    pub parent: Option<serde_json::Value>,
    #[serde(default)]
    pub parent_issue_url: Option<String>,
}

impl Issue {
    /// Number of sub-issues the record advertises. A missing summary block
    /// means zero, never "unknown".
    pub fn declared_sub_issue_count(&self) -> u64 {
        self.sub_issues_summary.map(|s| s.total).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SubIssuesSummary {
    pub total: u64,
}

/// Lightweight issue stub used for sub-issues, parents, and linked issues.
/// Never carries its own comments or events.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssueRef {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<Actor>,
    #[serde(default)]
    pub repository_url: Option<String>,
}
