//! Source Fallback Extractor
//!
//! Used when a caller only sends a URL: download the page, strip it to the
//! allow-listed tags and scan those into the result.

use std::time::Duration;

use tracing::warn;

use crate::encoding::transcode_with_content_type;
use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::markup::sanitize_markup;
use crate::result::ExtractionResult;
use crate::scanner::scan_sanitized_html;
use crate::url_utils::extract_hostname;

/// Fetch `url` and merge what it contains into `seed`.
///
/// The whole fetch is bounded by `timeout` regardless of how the
/// [`Fetcher`] behaves. On any fetch failure the returned result carries only
/// `errors`; `seed` is discarded. An empty `url` yields an empty result.
pub async fn source_fallback(
    fetcher: &dyn Fetcher,
    url: &str,
    seed: ExtractionResult,
    timeout: Duration,
) -> ExtractionResult {
    if url.is_empty() {
        return ExtractionResult::default();
    }

    let document = match tokio::time::timeout(timeout, fetcher.fetch(url, timeout)).await {
        Ok(Ok(document)) => document,
        Ok(Err(err)) => return fetch_failed(url, &err),
        Err(_) => {
            let err = FetchError::Download(format!(
                "operation timed out after {} seconds",
                timeout.as_secs()
            ));
            return fetch_failed(url, &err);
        }
    };

    let html = transcode_with_content_type(&document.body, document.content_type.as_deref());
    let clean = sanitize_markup(&html);

    let mut data = seed;
    scan_sanitized_html(&clean, &mut data);
    data
}

fn fetch_failed(url: &str, err: &FetchError) -> ExtractionResult {
    warn!(
        host = extract_hostname(url).unwrap_or_default(),
        error = %err,
        "source fetch failed"
    );
    ExtractionResult::from_errors(vec![err.to_string()])
}
