//! Centralized reader for the environment variables ghsum depends on.
//!
//! Variable names are defined as private constants here; the rest of the
//! code accesses values through a [`Config`] snapshot threaded explicitly
//! into the clients that need it.

const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
const GITHUB_API_URL: &str = "GHSUM_GITHUB_API_URL";
const ANTHROPIC_API_URL: &str = "GHSUM_ANTHROPIC_API_URL";

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_ANTHROPIC_API_URL: &str = "https://api.anthropic.com";

/// Snapshot of all configuration at load time.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub token. Optional: unauthenticated requests work against public
    /// repositories, only with lower rate limits.
    pub github_token: Option<String>,

    /// Anthropic API key. Required only when a summary is actually generated.
    pub anthropic_api_key: Option<String>,

    /// Base URL of the GitHub REST API.
    pub github_api_url: String,

    /// Base URL of the Anthropic API.
    pub anthropic_api_url: String,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl Config {
    /// Read all configuration from the current process environment.
    pub fn load() -> Self {
        Self {
            github_token: non_empty_var(GITHUB_TOKEN),
            anthropic_api_key: non_empty_var(ANTHROPIC_API_KEY),
            github_api_url: non_empty_var(GITHUB_API_URL)
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            anthropic_api_url: non_empty_var(ANTHROPIC_API_URL)
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_API_URL.to_string()),
        }
    }

    /// Config pointing at mock servers instead of the real APIs.
    #[cfg(test)]
    pub fn for_tests(github_api_url: &str, anthropic_api_url: &str) -> Self {
        Self {
            github_token: None,
            anthropic_api_key: Some("test-key".to_string()),
            github_api_url: github_api_url.to_string(),
            anthropic_api_url: anthropic_api_url.to_string(),
        }
    }
}
