//! The `summarize` subcommand: fetch an issue thread with its full context
//! and generate a citation-friendly summary.

mod context;
mod error;

pub use context::render_context;
pub use error::{Result, SummarizeError};

use chrono::{DateTime, Utc};
use clap::Args;

use crate::config::Config;
use crate::github::{self, GitHubClient, IssueThread};
use crate::llm::SummaryClient;

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct SummarizeArgs {
    /// Issue reference: a URL (https://github.com/owner/repo/issues/1) or shorthand (owner/repo#1)
    pub issue: String,

    /// Write the generated summary back to the issue body
    #[arg(short, long)]
    pub update: bool,

    /// Summarize the parent issue instead, when one exists
    #[arg(short, long)]
    pub parent: bool,

    /// Print the rendered context document before summarizing
    #[arg(long)]
    pub show_context: bool,
}

pub async fn run(args: &SummarizeArgs) -> Result<()> {
    run_with_config(args, &Config::load()).await
}

async fn run_with_config(args: &SummarizeArgs, config: &Config) -> Result<()> {
    let client = GitHubClient::new(config);

    let mut locator = github::parse_issue_query(&args.issue)?;
    let mut thread = github::fetch_thread(&client, &locator).await?;

    if args.parent {
        match github::parent_locator(&thread, &locator) {
            Some(parent) => {
                eprintln!("Redirecting to parent issue {parent}");
                locator = parent;
                thread = github::fetch_thread(&client, &locator).await?;
            }
            None => {
                eprintln!("Issue {locator} has no parent; summarizing it directly.");
            }
        }
    }

    for warning in &thread.warnings {
        eprintln!("warning: {warning}");
    }

    let readme = github::fetch_readme(&client, &locator).await.found();

    print!("{}", format_thread_overview(&thread, readme.as_deref()));

    if thread.comments.is_empty() {
        println!("No comments found for this issue. Skipping summary generation.");
        return Ok(());
    }

    let document = render_context(&thread, readme.as_deref());
    if args.show_context {
        println!("\n=== CONTEXT DOCUMENT ===\n{document}");
    }

    let summarizer = SummaryClient::new(config)?;
    println!("\nGenerating summary...");
    let summary = summarizer.summarize(&document).await?;

    println!("\n--- Summary ---\n\n{summary}");

    if args.update {
        let body = format!("{summary}{}", update_footer(Utc::now()));
        match github::update_issue_body(&client, &locator, &body).await {
            Ok(()) => println!("\nUpdated issue {locator} with the generated summary."),
            Err(err) => eprintln!("Failed to update issue {locator}: {err}"),
        }
    }

    Ok(())
}

/// Format the metadata block printed before any summary is attempted.
fn format_thread_overview(thread: &IssueThread, readme: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Title: {}\n", thread.title));
    out.push_str(&format!("State: {}\n", thread.state));
    out.push_str(&format!("Author: {}\n", thread.author.login));
    out.push_str(&format!("Created: {}\n", thread.created_at));
    out.push_str(&format!("Link: {}\n", thread.url));
    out.push_str(&format!("Comments: {}\n", thread.comments.len()));
    out.push_str(&format!("Events: {}\n", thread.events.len()));
    if !thread.sub_issues.is_empty() {
        out.push_str(&format!("Sub-issues: {}\n", thread.sub_issues.len()));
    }
    if let Some(parent) = &thread.parent {
        out.push_str(&format!("Parent: #{} {}\n", parent.number, parent.title));
    }
    match readme {
        Some(content) => {
            out.push_str(&format!("README: found ({} chars)\n", content.chars().count()));
        }
        None => out.push_str("README: not found\n"),
    }
    out
}

fn update_footer(now: DateTime<Utc>) -> String {
    format!(
        "\n\n---\n_Generated on {} by ghsum_",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
