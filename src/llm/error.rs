//! Summarizer error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("ANTHROPIC_API_KEY is not set; cannot generate a summary")]
    MissingApiKey,

    #[error("Anthropic API request failed with HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Anthropic API returned no text content")]
    EmptyResponse,

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LlmError>;
