//! Issue reference parsing.
//!
//! Accepts either a full issue URL (`https://github.com/owner/repo/issues/1`)
//! or the `owner/repo#1` shorthand. Pure parsing, no network access.

use std::fmt;

use lazy_regex::regex_captures;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Could not parse issue reference '{0}'. \
     Expected a URL like https://github.com/owner/repo/issues/1 or shorthand owner/repo#1"
)]
pub struct InvalidQuery(pub String);

/// Coordinates of a single issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocator {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl IssueLocator {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }
}

impl fmt::Display for IssueLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Parse a GitHub issue URL or `owner/repo#number` shorthand.
pub fn parse_issue_query(query: &str) -> Result<IssueLocator, InvalidQuery> {
    let trimmed = query.trim();

    if let Some((_, owner, repo, number)) =
        regex_captures!(r"^https?://[^/]+/([^/]+)/([^/]+)/issues/(\d+)/?$", trimmed)
    {
        return locator_from(owner, repo, number, query);
    }

    if let Some((_, owner, repo, number)) = regex_captures!(r"^([^/#]+)/([^/#]+)#(\d+)$", trimmed) {
        return locator_from(owner, repo, number, query);
    }

    Err(InvalidQuery(query.to_string()))
}

fn locator_from(
    owner: &str,
    repo: &str,
    number: &str,
    query: &str,
) -> Result<IssueLocator, InvalidQuery> {
    let number: u64 = number.parse().map_err(|_| InvalidQuery(query.to_string()))?;
    if number == 0 {
        return Err(InvalidQuery(query.to_string()));
    }
    Ok(IssueLocator::new(owner, repo, number))
}
