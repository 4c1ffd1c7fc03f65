//! The assembled issue thread aggregate.

use super::models::{Actor, Comment, Issue, IssueRef, TimelineEvent};
use super::query::{IssueLocator, parse_issue_query};
use super::resolve::Resolution;

/// A fully-resolved issue with its conversational context.
///
/// Built once per invocation, never mutated after assembly. `comments` and
/// `events` are always complete sequences: a degraded fetch collapses to an
/// empty list with its reason recorded in `warnings`, never a partial page.
#[derive(Debug, Clone)]
pub struct IssueThread {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub author: Actor,
    pub url: String,
    pub state: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub body: Option<String>,
    pub comments: Vec<Comment>,
    pub events: Vec<TimelineEvent>,
    pub sub_issues: Vec<IssueRef>,
    pub parent: Option<IssueRef>,
    /// Reasons any optional piece came back degraded.
    pub warnings: Vec<String>,
}

/// Join the primary issue record and the four resolver outputs into one
/// immutable thread. Pure combination, no network access.
pub fn assemble(
    issue: Issue,
    comments: Resolution<Vec<Comment>>,
    events: Resolution<Vec<TimelineEvent>>,
    sub_issues: Resolution<Vec<IssueRef>>,
    parent: Resolution<IssueRef>,
) -> IssueThread {
    let mut warnings = Vec::new();

    let comments = take_list("comments", comments, &mut warnings);
    let events = take_list("events", events, &mut warnings);
    let sub_issues = take_list("sub-issues", sub_issues, &mut warnings);

    let parent = match parent {
        Resolution::Found(parent) => Some(parent),
        Resolution::Absent => None,
        Resolution::Degraded(reason) => {
            warnings.push(format!("parent: {reason}"));
            None
        }
    };

    IssueThread {
        id: issue.id,
        number: issue.number,
        title: issue.title,
        author: issue.user,
        url: issue.html_url,
        state: issue.state,
        created_at: issue.created_at,
        updated_at: issue.updated_at,
        body: issue.body,
        comments,
        events,
        sub_issues,
        parent,
        warnings,
    }
}

fn take_list<T>(name: &str, resolution: Resolution<Vec<T>>, warnings: &mut Vec<String>) -> Vec<T> {
    match resolution {
        Resolution::Found(items) => items,
        Resolution::Absent => Vec::new(),
        Resolution::Degraded(reason) => {
            warnings.push(format!("{name}: {reason}"));
            Vec::new()
        }
    }
}

/// Coordinates for re-running the whole pipeline against a thread's parent.
///
/// Cross-repository parents are resolved through the parent's
/// `repository_url` (`.../repos/{owner}/{repo}`), falling back to the path
/// of its `html_url`; only when neither yields coordinates is the parent
/// assumed to live in the current repository. Returns `None` when the
/// thread has no parent.
pub fn parent_locator(thread: &IssueThread, current: &IssueLocator) -> Option<IssueLocator> {
    let parent = thread.parent.as_ref()?;

    let (owner, repo) = parent
        .repository_url
        .as_deref()
        .and_then(parse_repository_url)
        .or_else(|| {
            parse_issue_query(&parent.html_url)
                .ok()
                .map(|locator| (locator.owner, locator.repo))
        })
        .unwrap_or_else(|| (current.owner.clone(), current.repo.clone()));

    Some(IssueLocator {
        owner,
        repo,
        number: parent.number,
    })
}

/// Parse `(owner, repo)` out of an API repository URL like
/// `https://api.github.com/repos/acme/core`.
fn parse_repository_url(url: &str) -> Option<(String, String)> {
    let (_, tail) = url.split_once("/repos/")?;
    let mut parts = tail.trim_end_matches('/').split('/');
    let owner = parts.next()?;
    let repo = parts.next()?;
    if owner.is_empty() || repo.is_empty() {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}
