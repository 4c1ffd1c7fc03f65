mod actor;
mod comment;
mod event;
mod issue;

pub use actor::Actor;
pub use comment::Comment;
pub use event::{EventSource, TimelineEvent};
pub use issue::{Issue, IssueRef, SubIssuesSummary};
