//! Summary generation via the Anthropic Messages API.

mod client;
mod error;

pub use client::SummaryClient;
pub use error::LlmError;
