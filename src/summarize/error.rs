use thiserror::Error;

use crate::github::{GitHubError, InvalidQuery};
use crate::llm::LlmError;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error(transparent)]
    InvalidQuery(#[from] InvalidQuery),

    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Summarizer(#[from] LlmError),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
