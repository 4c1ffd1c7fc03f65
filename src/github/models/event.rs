use serde::Deserialize;

use super::{Actor, IssueRef};

/// A single entry from an issue's timeline.
///
/// `actor` is absent for system-generated entries. A few event kinds
/// (e.g. `committed`) carry neither `id` nor `created_at`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineEvent {
    #[serde(default)]
    pub id: Option<u64>,
    pub event: String,
    #[serde(default)]
    pub actor: Option<Actor>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub commit_id: Option<String>,
    #[serde(default)]
    pub source: Option<EventSource>,
}

/// Cross-reference payload, present only on `cross-referenced` entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventSource {
    #[serde(default)]
    pub issue: Option<IssueRef>,
}

impl TimelineEvent {
    pub fn actor_login(&self) -> &str {
        self.actor
            .as_ref()
            .map(|a| a.login.as_str())
            .unwrap_or("github")
    }

    /// The issue referenced by this event, for cross-reference-type events.
    pub fn linked_issue(&self) -> Option<&IssueRef> {
        self.source.as_ref().and_then(|s| s.issue.as_ref())
    }
}
