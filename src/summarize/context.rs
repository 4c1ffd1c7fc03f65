//! Context document rendering.
//!
//! Serializes an assembled [`IssueThread`] into the delimited document the
//! summarizer consumes. Per-comment and per-event source URLs are preserved
//! verbatim so the summary can cite them. Rendering is deterministic: same
//! thread in, same document out.

use crate::github::IssueThread;
use crate::github::models::{IssueRef, TimelineEvent};

/// Character budget for README content included in the document.
pub const README_CHAR_BUDGET: usize = 10_000;

/// Character budget for linked-issue body excerpts.
const EXCERPT_CHAR_BUDGET: usize = 400;

const TRUNCATION_MARKER: &str = "\n[... truncated]";

/// Render the full context document for a thread, optionally with the
/// repository README.
pub fn render_context(thread: &IssueThread, readme: Option<&str>) -> String {
    let mut doc = String::new();

    doc.push_str("=== ISSUE ===\n");
    doc.push_str(&format!("Title: {}\n", thread.title));
    doc.push_str(&format!(
        "Author: {} ({})\n",
        thread.author.login, thread.author.html_url
    ));
    doc.push_str(&format!("State: {}\n", thread.state));
    doc.push_str(&format!("Created: {}\n", thread.created_at));
    if let Some(updated) = &thread.updated_at {
        doc.push_str(&format!("Updated: {updated}\n"));
    }
    doc.push_str(&format!("URL: {}\n", thread.url));

    doc.push_str("\n=== ISSUE BODY ===\n");
    doc.push_str(thread.body.as_deref().unwrap_or("(No body)"));
    doc.push('\n');

    if let Some(readme) = readme {
        doc.push_str("\n=== REPOSITORY README ===\n");
        doc.push_str(&truncate(readme, README_CHAR_BUDGET));
        doc.push('\n');
    }

    if let Some(parent) = &thread.parent {
        doc.push_str("\n=== PARENT ISSUE ===\n");
        doc.push_str(&render_issue_ref(parent));
    }

    if !thread.sub_issues.is_empty() {
        doc.push_str(&format!(
            "\n=== SUB-ISSUES ({}) ===\n",
            thread.sub_issues.len()
        ));
        for sub_issue in &thread.sub_issues {
            doc.push_str(&render_issue_ref(sub_issue));
        }
    }

    doc.push_str(&format!("\n=== COMMENTS ({}) ===\n", thread.comments.len()));
    for comment in &thread.comments {
        doc.push_str(&format!(
            "\n--- Comment by {} at {} (URL: {}) ---\n{}\n",
            comment.author_login(),
            comment.created_at,
            comment.html_url,
            comment.body
        ));
    }

    doc.push_str(&format!("\n=== TIMELINE ({}) ===\n", thread.events.len()));
    for event in &thread.events {
        doc.push_str(&render_event(event));
    }

    doc
}

fn render_event(event: &TimelineEvent) -> String {
    let mut out = format!(
        "\n--- Event: {} by {} at {} ---\n",
        event.event,
        event.actor_login(),
        event.created_at.as_deref().unwrap_or("unknown time")
    );
    if let Some(commit_id) = &event.commit_id {
        out.push_str(&format!("Commit: {commit_id}\n"));
    }
    if let Some(linked) = event.linked_issue() {
        out.push_str("Linked issue:\n");
        out.push_str(&render_issue_ref(linked));
    }
    out
}

fn render_issue_ref(issue: &IssueRef) -> String {
    let mut out = format!(
        "#{} {} [{}] (URL: {})\n",
        issue.number, issue.title, issue.state, issue.html_url
    );
    if let Some(body) = issue.body.as_deref().filter(|b| !b.is_empty()) {
        out.push_str(&format!("> {}\n", truncate(body, EXCERPT_CHAR_BUDGET)));
    }
    out
}

/// Truncate to a character budget, appending a marker only when content was
/// actually dropped.
fn truncate(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(budget).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
