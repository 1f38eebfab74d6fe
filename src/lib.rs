//! # press-scan
//!
//! Extraction and sanitization pipeline behind a "press this" style quick
//! posting tool. Given a source URL, or candidates a browser client already
//! pulled out of a page, it produces a bounded, sanitized
//! [`ExtractionResult`]: title and description metadata, relevant images,
//! canonical embed URLs and a few link relations.
//!
//! ## Quick Start
//!
//! ```rust
//! use press_scan::extract_from_html;
//!
//! let html = r#"<html><head>
//! <meta property="og:title" content="My Article">
//! <meta property="og:image" content="https://example.com/cover.jpg">
//! </head><body>
//! <iframe src="https://player.vimeo.com/video/12345"></iframe>
//! </body></html>"#;
//!
//! let data = extract_from_html(html);
//! assert_eq!(data.meta.get("og:title").map(String::as_str), Some("My Article"));
//! assert_eq!(data.images, vec!["https://example.com/cover.jpg"]);
//! assert_eq!(data.embeds, vec!["https://vimeo.com/12345"]);
//! ```
//!
//! ## Pipeline
//!
//! - **Bounds**: every untrusted value is length/count bounded first ([`bounds`])
//! - **Classifiers**: image relevance, embed canonicalization, meta routing ([`classify`])
//! - **Scanner**: pattern scan of allow-listed markup ([`scanner`], [`markup`])
//! - **Merger**: structured vs. fetch-and-scan request handling ([`Extractor`])

mod error;
mod fallback;
mod options;
mod patterns;
mod pipeline;

/// Size and length bounding primitives.
pub mod bounds;

/// Image, embed and metadata classifiers.
pub mod classify;

/// DOM operations adapter.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Source document fetching.
pub mod fetch;

/// Allow-list markup sanitizer.
pub mod markup;

/// Host extension hooks.
pub mod policy;

/// Caller payload decoding.
pub mod request;

/// Result types.
pub mod result;

/// Tag scanner over sanitized markup.
pub mod scanner;

/// Editor site settings.
pub mod settings;

/// Content image sideloading.
pub mod sideload;

/// Entity decoding and text cleanup.
pub mod text;

/// URL qualification and parsing.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, FetchError, Result};
pub use fallback::source_fallback;
pub use fetch::{FetchedDocument, Fetcher, HttpFetcher};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use pipeline::Extractor;
pub use policy::{DefaultPolicy, Policy};
pub use request::RequestPayload;
pub use result::{ExtractionResult, LinkRelation};
pub use settings::{EditorBootstrap, SiteSettings, SuggestedHtml};
pub use sideload::{side_load_images, MediaSideloader};

/// Extract candidates from a raw HTML document already in memory.
///
/// The document goes through the same allow-list sanitizer and tag scanner
/// as a fetched page.
#[must_use]
pub fn extract_from_html(html: &str) -> ExtractionResult {
    let clean = markup::sanitize_markup(html);
    let mut data = ExtractionResult::default();
    scanner::scan_sanitized_html(&clean, &mut data);
    data
}

/// Scan markup that has already been through an allow-list sanitizer.
///
/// Use this when the host runs its own sanitizer.
#[must_use]
pub fn extract_from_sanitized(sanitized: &str) -> ExtractionResult {
    let mut data = ExtractionResult::default();
    scanner::scan_sanitized_html(sanitized, &mut data);
    data
}
