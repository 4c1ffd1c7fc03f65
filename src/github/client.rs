//! reqwest-based GitHub REST client.
//!
//! The client knows nothing about record schemas: it exposes single GETs,
//! a paginated GET that follows `Link: rel="next"` headers, and a PATCH.
//! Base URL and credential are carried explicitly, no global client state.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{GitHubError, Result};
use crate::config::Config;

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.github_api_url.trim_end_matches('/').to_string(),
            token: config.github_token.clone(),
        }
    }

    /// Build an absolute URL for an API path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(&self, accept: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
        headers.insert(USER_AGENT, HeaderValue::from_static("ghsum"));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        if let Some(token) = &self.token {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("GITHUB_TOKEN contains invalid header characters, ignoring it"),
            }
        }
        headers
    }

    /// Single GET returning a decoded JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .headers(self.headers(JSON_MEDIA_TYPE))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Fetch {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| GitHubError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Single GET requesting the raw media type, returning the body as text.
    pub async fn get_raw(&self, url: &str) -> Result<String> {
        debug!(%url, "GET (raw)");
        let response = self
            .http
            .get(url)
            .headers(self.headers(RAW_MEDIA_TYPE))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Fetch {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// GET a collection, following `Link: rel="next"` headers until the last
    /// page. Pages are concatenated in response order; a failure on any page
    /// fails the whole fetch.
    pub async fn get_paginated<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let mut records = Vec::new();
        let mut next = Some(url.to_string());

        while let Some(page_url) = next {
            debug!(url = %page_url, "GET (paginated)");
            let response = self
                .http
                .get(&page_url)
                .headers(self.headers(JSON_MEDIA_TYPE))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(GitHubError::Fetch {
                    status: status.as_u16(),
                    url: page_url,
                });
            }

            next = next_page_url(response.headers());
            let bytes = response.bytes().await?;
            let page: Vec<T> = serde_json::from_slice(&bytes)
                .map_err(|source| GitHubError::Decode { url: page_url, source })?;
            records.extend(page);
        }

        Ok(records)
    }

    /// PATCH a JSON body to a resource. Success/failure only, no decoded
    /// response.
    pub async fn patch_json(&self, url: &str, body: &serde_json::Value) -> Result<()> {
        debug!(%url, "PATCH");
        let response = self
            .http
            .patch(url)
            .headers(self.headers(JSON_MEDIA_TYPE))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Fetch {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(())
    }
}

/// Extract the `rel="next"` target from a `Link` response header, if any.
fn next_page_url(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;
    link.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        if params.split(';').any(|p| p.trim() == "rel=\"next\"") {
            Some(
                target
                    .trim()
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string(),
            )
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_next_link_is_extracted() {
        let headers = link_headers(
            "<https://api.github.com/repos/a/b/issues/1/comments?page=2>; rel=\"next\", \
             <https://api.github.com/repos/a/b/issues/1/comments?page=5>; rel=\"last\"",
        );
        assert_eq!(
            next_page_url(&headers).as_deref(),
            Some("https://api.github.com/repos/a/b/issues/1/comments?page=2")
        );
    }

    #[test]
    fn test_no_next_link_on_last_page() {
        let headers = link_headers(
            "<https://api.github.com/repos/a/b/issues/1/comments?page=1>; rel=\"prev\", \
             <https://api.github.com/repos/a/b/issues/1/comments?page=1>; rel=\"first\"",
        );
        assert_eq!(next_page_url(&headers), None);
    }

    #[test]
    fn test_missing_link_header() {
        assert_eq!(next_page_url(&HeaderMap::new()), None);
    }

    #[test]
    fn test_url_joins_path_against_base() {
        let config = Config::for_tests("http://127.0.0.1:8080/", "http://127.0.0.1:8081");
        let client = GitHubClient::new(&config);
        assert_eq!(
            client.url("/repos/acme/widgets/issues/1"),
            "http://127.0.0.1:8080/repos/acme/widgets/issues/1"
        );
    }
}
