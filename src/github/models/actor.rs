use serde::Deserialize;

/// A GitHub user referenced by issues, comments, and timeline events.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Actor {
    pub login: String,
    pub html_url: String,
}
