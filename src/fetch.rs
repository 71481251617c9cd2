//! Fetching webmentions from a webmention.io compatible API.

use std::time::Duration;

use thiserror::Error;

use crate::mention::{Feed, Mention};

/// Public webmention.io instance.
pub const DEFAULT_ENDPOINT: &str = "https://webmention.io";

/// Page size requested from the API. The service caps results per request,
/// so this is effectively "everything".
pub const DEFAULT_PER_PAGE: u32 = 999;

/// Failure while retrieving mentions.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("response from {url} is not a mentions feed")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of webmentions for a target URL.
pub trait MentionSource {
    /// Returns mentions of `target` in the order the source lists them.
    fn fetch(&self, target: &str) -> Result<Vec<Mention>, FetchError>;
}

/// Builds the `mentions.jf2` request URL.
///
/// The target is inserted verbatim and must already be URL safe.
pub fn mentions_url(endpoint: &str, target: &str, per_page: u32) -> String {
    format!(
        "{}/api/mentions.jf2?target={}&per-page={}",
        endpoint.trim_end_matches('/'),
        target,
        per_page
    )
}

/// Parses a `mentions.jf2` response body.
///
/// A body without `children` yields no mentions.
///
/// # Errors
///
/// Returns error if the body is not JSON or does not have the feed shape.
pub fn parse_feed(url: &str, body: &[u8]) -> Result<Vec<Mention>, FetchError> {
    serde_json::from_slice::<Feed>(body)
        .map(|feed| feed.children)
        .map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
}

/// HTTP client for webmention.io.
pub struct WebmentionIo {
    client: reqwest::blocking::Client,
    endpoint: String,
    per_page: u32,
}

impl WebmentionIo {
    /// Creates a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>, per_page: u32, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, endpoint, per_page))
    }

    /// Creates a client for `endpoint` around a preconfigured HTTP client.
    pub fn with_client(
        client: reqwest::blocking::Client,
        endpoint: impl Into<String>,
        per_page: u32,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            per_page,
        }
    }

    /// Returns the request URL for `target`.
    pub fn url_for(&self, target: &str) -> String {
        mentions_url(&self.endpoint, target, self.per_page)
    }
}

impl MentionSource for WebmentionIo {
    fn fetch(&self, target: &str) -> Result<Vec<Mention>, FetchError> {
        let url = self.url_for(target);
        log::debug!("GET {}", url);

        let request_error = |source| FetchError::Request {
            url: url.clone(),
            source,
        };

        let response = self.client.get(&url).send().map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(request_error)?;
        let mentions = parse_feed(&url, &body)?;
        log::debug!("{} mentions for {}", mentions.len(), target);
        Ok(mentions)
    }
}
