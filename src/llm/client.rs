//! Anthropic Messages API client.
//!
//! Consumes a rendered context document and returns a markdown summary.
//! Prompt wording lives here, fully separated from fetching and rendering.

use indoc::indoc;
use serde::Deserialize;
use serde_json::json;

use super::error::{LlmError, Result};
use crate::config::Config;

const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 2000;
const ANTHROPIC_VERSION: &str = "2023-06-01";

const INSTRUCTIONS: &str = indoc! {"
    You are an expert technical assistant tasked with summarizing a GitHub
    issue discussion. The goal is to create a clean entrypoint summary that
    captures the current consensus, open questions, decisions made, and key
    action items.

    CRITICAL REQUIREMENT:
    You MUST cite your sources. Every key claim, decision, or quote in your
    summary must be linked back to the specific comment URL where it
    originated. Use markdown links like this: [comment by username](url).

    Ignore simple \"+1\" or \"me too\" comments unless they indicate
    significant community support for a specific approach. Focus on the
    technical details and the flow of the conversation.
"};

const OUTPUT_FORMAT: &str = indoc! {"
    Please provide a concise summary in Markdown, using an outline or nested
    list style, with fewer main headlines. Focus on being brief and to the
    point. Include the following consolidated sections:

    ### Summary of Discussion

    *   **Issue Overview**: a brief, one-paragraph explanation of the issue.
    *   **Key Points & Decisions**: the main arguments, technical details,
        and any decisions made. Cite sources!
    *   **Action Items / Next Steps**: remaining tasks or next steps
        identified. Cite sources!
"};

pub struct SummaryClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SummaryClient {
    /// Build a client from configuration. Fails before any request when no
    /// API key is configured, so no context is ever sent without one.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .anthropic_api_key
            .clone()
            .ok_or(LlmError::MissingApiKey)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.anthropic_api_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Generate a markdown summary for a rendered context document.
    pub async fn summarize(&self, context: &str) -> Result<String> {
        let prompt = format!("{INSTRUCTIONS}\n{context}\n\n{OUTPUT_FORMAT}");
        let request = json!({
            "model": MODEL,
            "max_tokens": MAX_TOKENS,
            "temperature": 0,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let url = format!("{}/v1/messages", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: MessagesResponse = response.json().await?;
        body.content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}
