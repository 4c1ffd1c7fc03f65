//! Resource resolvers.
//!
//! Each resolver fetches one piece of an issue thread and carries its own
//! presence/absence policy. Only the primary issue fetch is allowed to fail
//! the pipeline; every optional sub-resource degrades at the resolver
//! boundary to an explicit [`Resolution`] joined at assembly time.

use tracing::warn;

use super::client::GitHubClient;
use super::error::{GitHubError, Result};
use super::models::{Comment, Issue, IssueRef, TimelineEvent};
use super::query::IssueLocator;
use super::thread::{IssueThread, assemble};

/// Outcome of resolving an optional sub-resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Found(T),
    Absent,
    /// The fetch failed; the reason has already been logged and the pipeline
    /// continues with an empty/absent value.
    Degraded(String),
}

impl<T> Resolution<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent | Self::Degraded(_) => None,
        }
    }
}

/// Fetch the primary issue record. The only resolver whose failure aborts
/// the whole pipeline.
pub async fn fetch_issue(client: &GitHubClient, locator: &IssueLocator) -> Result<Issue> {
    let url = client.url(&format!(
        "repos/{}/{}/issues/{}",
        locator.owner, locator.repo, locator.number
    ));
    client.get_json(&url).await
}

/// Fetch the complete comment list, transparently following pagination.
/// A malformed record fails the whole resolver, never a silent skip.
pub async fn fetch_comments(client: &GitHubClient, issue: &Issue) -> Result<Vec<Comment>> {
    client.get_paginated(&issue.comments_url).await
}

/// Fetch the complete timeline. An empty timeline is a valid result.
pub async fn fetch_events(
    client: &GitHubClient,
    locator: &IssueLocator,
    issue: &Issue,
) -> Result<Vec<TimelineEvent>> {
    let url = issue.timeline_url.clone().unwrap_or_else(|| {
        client.url(&format!(
            "repos/{}/{}/issues/{}/timeline",
            locator.owner, locator.repo, locator.number
        ))
    });
    client.get_paginated(&url).await
}

/// Fetch declared sub-issues.
///
/// Performs no request at all when the primary record does not advertise a
/// positive sub-issue count. Any failure degrades to an empty list; a broken
/// sub-issue fetch must never abort the pipeline.
pub async fn fetch_sub_issues(
    client: &GitHubClient,
    locator: &IssueLocator,
    issue: &Issue,
) -> Resolution<Vec<IssueRef>> {
    if issue.declared_sub_issue_count() == 0 {
        return Resolution::Absent;
    }

    let url = client.url(&format!(
        "repos/{}/{}/issues/{}/sub_issues",
        locator.owner, locator.repo, locator.number
    ));
    match client.get_paginated::<IssueRef>(&url).await {
        Ok(sub_issues) => Resolution::Found(sub_issues),
        Err(err) => {
            warn!(%url, error = %err, "sub-issue fetch failed, continuing without sub-issues");
            Resolution::Degraded(err.to_string())
        }
    }
}

/// Resolve the parent issue.
///
/// Two mutually exclusive paths: an inline parent object on the primary
/// record wins and costs no request; otherwise a `parent_issue_url` triggers
/// exactly one follow-up GET. Failures and unrecognized shapes degrade to
/// "no parent".
pub async fn fetch_parent(client: &GitHubClient, issue: &Issue) -> Resolution<IssueRef> {
    if let Some(value) = &issue.parent
        && !value.is_null()
    {
        return match serde_json::from_value::<IssueRef>(value.clone()) {
            Ok(parent) => Resolution::Found(parent),
            Err(err) => {
                warn!(error = %err, "unrecognized inline parent shape, continuing without parent");
                Resolution::Degraded(format!("unrecognized parent shape: {err}"))
            }
        };
    }

    let Some(url) = &issue.parent_issue_url else {
        return Resolution::Absent;
    };

    match client.get_json::<IssueRef>(url).await {
        Ok(parent) => Resolution::Found(parent),
        Err(err) => {
            warn!(%url, error = %err, "parent fetch failed, continuing without parent");
            Resolution::Degraded(err.to_string())
        }
    }
}

/// Fetch the repository README as raw text. A missing README is a normal
/// absence, not an error; any other failure degrades with a warning.
pub async fn fetch_readme(client: &GitHubClient, locator: &IssueLocator) -> Resolution<String> {
    let url = client.url(&format!("repos/{}/{}/readme", locator.owner, locator.repo));
    match client.get_raw(&url).await {
        Ok(content) => Resolution::Found(content),
        Err(GitHubError::Fetch { status: 404, .. }) => Resolution::Absent,
        Err(err) => {
            warn!(%url, error = %err, "README fetch failed, continuing without README");
            Resolution::Degraded(err.to_string())
        }
    }
}

/// Fetch every piece of an issue thread and assemble the aggregate.
///
/// Resolvers run sequentially and independently; assembly happens only once
/// every resolver has terminated, successfully or in its degraded state.
pub async fn fetch_thread(client: &GitHubClient, locator: &IssueLocator) -> Result<IssueThread> {
    let issue = fetch_issue(client, locator).await?;

    let comments = match fetch_comments(client, &issue).await {
        Ok(comments) => Resolution::Found(comments),
        Err(err) => {
            warn!(error = %err, "comment fetch failed, continuing with an empty discussion");
            Resolution::Degraded(err.to_string())
        }
    };

    let events = match fetch_events(client, locator, &issue).await {
        Ok(events) => Resolution::Found(events),
        Err(err) => {
            warn!(error = %err, "timeline fetch failed, continuing without events");
            Resolution::Degraded(err.to_string())
        }
    };

    let sub_issues = fetch_sub_issues(client, locator, &issue).await;
    let parent = fetch_parent(client, &issue).await;

    Ok(assemble(issue, comments, events, sub_issues, parent))
}

/// Overwrite the issue body. Single best-effort PATCH, no partial-update
/// semantics.
pub async fn update_issue_body(
    client: &GitHubClient,
    locator: &IssueLocator,
    body: &str,
) -> Result<()> {
    let url = client.url(&format!(
        "repos/{}/{}/issues/{}",
        locator.owner, locator.repo, locator.number
    ));
    client.patch_json(&url, &serde_json::json!({ "body": body })).await
}
