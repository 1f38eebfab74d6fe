//! Source document fetching.
//!
//! The pipeline only ever sees the [`Fetcher`] trait so callers can plug in
//! their own transport (or a canned one in tests). [`HttpFetcher`] is the
//! stock `reqwest` implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{redirect, Client, StatusCode};
use tracing::{debug, info};

use crate::error::{Error, FetchError, Result};
use crate::options::Options;
use crate::url_utils::{extract_hostname, fetchable_url};

/// Raw bytes of a fetched document plus the header needed to decode them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedDocument {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

/// Downloads a source document.
///
/// Implementations must give up after `timeout` and report why through
/// [`FetchError`]; they never panic on network input.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration)
        -> std::result::Result<FetchedDocument, FetchError>;
}

/// [`Fetcher`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_response_bytes: usize,
}

impl HttpFetcher {
    /// Build a fetcher honouring the redirect limit, user agent and response
    /// size cap from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the TLS backend cannot be initialised.
    pub fn new(options: &Options) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.fetch_timeout)
            .redirect(redirect::Policy::limited(options.max_redirects))
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self {
            client,
            max_response_bytes: options.max_response_bytes,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<FetchedDocument, FetchError> {
        let Some(target) = fetchable_url(url) else {
            return Err(FetchError::Download("A valid URL was not provided.".to_string()));
        };

        let started = Instant::now();
        let host = extract_hostname(url).unwrap_or_default();
        debug!(%host, "fetching source document");

        let mut response = self
            .client
            .get(target)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::Download(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or("Unexpected status");
            return Err(FetchError::Download(reason.to_string()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Download(e.to_string()))?
        {
            let room = self.max_response_bytes.saturating_sub(body.len());
            if chunk.len() >= room {
                body.extend_from_slice(&chunk[..room]);
                debug!(%host, limit = self.max_response_bytes, "response truncated");
                break;
            }
            body.extend_from_slice(&chunk);
        }

        if body.is_empty() {
            return Err(FetchError::Unreadable);
        }

        info!(
            %host,
            bytes = body.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "fetched source document"
        );

        Ok(FetchedDocument { body, content_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_unfetchable_urls_without_network() {
        let fetcher = HttpFetcher::new(&Options::default());
        let Ok(fetcher) = fetcher else {
            panic!("client should build with default options");
        };

        for url in ["javascript:alert(1)", "/relative", "ftp://example.com/x", ""] {
            let err = fetcher.fetch(url, Duration::from_secs(1)).await;
            assert_eq!(
                err,
                Err(FetchError::Download("A valid URL was not provided.".to_string())),
                "{url}"
            );
        }
    }
}
