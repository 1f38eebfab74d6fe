//! In-memory fetchers shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use press_scan::{Extractor, FetchError, FetchedDocument, Fetcher, Options};

/// Serves the same document for every URL and counts calls.
pub struct StaticFetcher {
    body: Vec<u8>,
    content_type: Option<String>,
    pub calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn html(body: &str) -> Self {
        Self {
            body: body.as_bytes().to_vec(),
            content_type: Some("text/html; charset=utf-8".to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn bytes(body: &[u8], content_type: Option<&str>) -> Self {
        Self {
            body: body.to_vec(),
            content_type: content_type.map(str::to_string),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, _url: &str, _timeout: Duration) -> Result<FetchedDocument, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FetchedDocument {
            body: self.body.clone(),
            content_type: self.content_type.clone(),
        })
    }
}

/// Always fails with the given error.
pub struct FailingFetcher(pub FetchError);

#[async_trait]
impl Fetcher for FailingFetcher {
    async fn fetch(&self, _url: &str, _timeout: Duration) -> Result<FetchedDocument, FetchError> {
        Err(self.0.clone())
    }
}

/// Ignores the timeout it is given and never answers in time.
pub struct StallingFetcher;

#[async_trait]
impl Fetcher for StallingFetcher {
    async fn fetch(&self, _url: &str, _timeout: Duration) -> Result<FetchedDocument, FetchError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(FetchedDocument::default())
    }
}

pub fn extractor_with(fetcher: Arc<dyn Fetcher>) -> Extractor {
    Extractor::with_fetcher(Options::default(), fetcher)
}
