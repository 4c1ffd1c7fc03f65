use serde::Deserialize;

use super::Actor;

/// A comment on an issue.
///
/// Comments arrive oldest first and that order is preserved all the way
/// through rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub user: Actor,
    pub body: String,
    pub html_url: String,
    pub created_at: String,
}

impl Comment {
    pub fn author_login(&self) -> &str {
        &self.user.login
    }
}
