//! Request Data Merger
//!
//! [`Extractor`] turns one caller payload into an [`ExtractionResult`]. Newer
//! clients submit pre-extracted candidates (structured mode); older ones send
//! just a URL and the page is fetched and scanned (fallback mode). The mode is
//! chosen once per request and never mixed.

use std::sync::Arc;

use tracing::{debug, info};

use crate::bounds::{is_present, limit_array, limit_key, limit_string, limit_url, limit_value};
use crate::classify::{limit_embed, limit_img, process_meta_entry};
use crate::error::Result;
use crate::fallback::source_fallback;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::options::Options;
use crate::policy::{DefaultPolicy, Policy};
use crate::request::{unslash_value, RequestPayload};
use crate::result::ExtractionResult;
use crate::settings::{EditorBootstrap, SiteSettings, SuggestedHtml, SETTINGS_VERSION};
use crate::text::unslash;

/// Structured candidate lists, in processing order.
const STRUCTURED_FIELDS: [StructuredField; 3] =
    [StructuredField::Images, StructuredField::Embeds, StructuredField::Meta];

#[derive(Debug, Clone, Copy)]
enum StructuredField {
    Meta,
    Images,
    Embeds,
}

impl StructuredField {
    fn key(self) -> &'static str {
        match self {
            Self::Meta => "_meta",
            Self::Images => "_img",
            Self::Embeds => "_embed",
        }
    }
}

/// Extraction pipeline with its collaborators.
///
/// # Example
///
/// ```no_run
/// use press_scan::{Extractor, Options, RequestPayload};
///
/// # async fn run() -> press_scan::Result<()> {
/// let extractor = Extractor::new(Options::default())?;
/// let payload = RequestPayload::from_query("u=https%3A%2F%2Fexample.com%2Fpost");
/// let data = extractor.merge_or_fetch(&payload).await;
/// println!("{}", serde_json::to_string(&data).unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Extractor {
    options: Options,
    fetcher: Arc<dyn Fetcher>,
    policy: Arc<dyn Policy>,
}

impl Extractor {
    /// Extractor fetching over HTTP with the default policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Client`] if the HTTP client cannot be built.
    pub fn new(options: Options) -> Result<Self> {
        let fetcher = HttpFetcher::new(&options)?;
        Ok(Self::with_fetcher(options, Arc::new(fetcher)))
    }

    /// Extractor using a caller-supplied fetcher.
    #[must_use]
    pub fn with_fetcher(options: Options, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            options,
            fetcher,
            policy: Arc::new(DefaultPolicy),
        }
    }

    /// Replace the extension hooks.
    #[must_use]
    pub fn with_policy(mut self, policy: Arc<dyn Policy>) -> Self {
        self.policy = policy;
        self
    }

    /// The options this extractor was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Build the result for one request.
    ///
    /// Scalars (`u`, `s`, `t`, `v`, `_version`) are read POST-over-GET and kept
    /// only if non-empty after cleaning. Then, if media discovery is on:
    ///
    /// - no form body but a usable `u`: fetch and scan the source page
    /// - otherwise: route any `_meta`, `_img`, `_embed` form lists through the
    ///   classifiers
    ///
    /// The policy's `filter_data` hook sees the result last.
    pub async fn merge_or_fetch(&self, payload: &RequestPayload) -> ExtractionResult {
        let mut data = ExtractionResult {
            source_url: payload
                .scalar("u")
                .and_then(|u| limit_url(&u))
                .filter(|u| is_present(u)),
            selection: bounded_scalar(payload, "s"),
            title: bounded_scalar(payload, "t"),
            embed_hint: bounded_scalar(payload, "v"),
            version: bounded_scalar(payload, "_version"),
            ..ExtractionResult::default()
        };

        if !self.policy.enable_media_discovery(self.options.media_discovery) {
            debug!("media discovery disabled");
            return self.policy.filter_data(data);
        }

        match data.source_url.clone() {
            Some(url) if !payload.has_post() => {
                info!(mode = "fallback", "merging request data");
                data = self.source_fallback(&url, data).await;
            }
            _ => {
                debug!(mode = "structured", "merging request data");
                merge_structured(payload, &mut data);
            }
        }

        self.policy.filter_data(data)
    }

    /// Fetch `url` and scan it into `seed`, bounded by the configured timeout.
    pub async fn source_fallback(&self, url: &str, seed: ExtractionResult) -> ExtractionResult {
        source_fallback(self.fetcher.as_ref(), url, seed, self.options.fetch_timeout).await
    }

    /// Settings block for the editor, after the policy hooks.
    #[must_use]
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            version: SETTINGS_VERSION.to_string(),
            redir_in_parent: self.policy.redirect_in_parent(),
            html: self.policy.suggested_html(SuggestedHtml::default()),
        }
    }

    /// Merge the request and pair it with the site settings.
    ///
    /// The data's `_version` is stamped with the settings version.
    pub async fn bootstrap(&self, payload: &RequestPayload) -> EditorBootstrap {
        let config = self.site_settings();
        let mut data = self.merge_or_fetch(payload).await;
        data.version = Some(config.version.clone());
        EditorBootstrap { data, config }
    }
}

fn bounded_scalar(payload: &RequestPayload, key: &str) -> Option<String> {
    payload
        .scalar(key)
        .map(|v| limit_string(&v))
        .filter(|v| is_present(v))
}

/// Route submitted candidate lists through the classifiers.
fn merge_structured(payload: &RequestPayload, data: &mut ExtractionResult) {
    for field in STRUCTURED_FIELDS {
        let Some(items) = payload.structured(field.key()) else {
            continue;
        };

        for (key, value) in limit_array(items) {
            let key = match key {
                Some(raw) => match limit_key(&unslash(raw)) {
                    Some(key) => Some(key),
                    None => continue,
                },
                None => None,
            };
            let value = unslash_value(value);

            match field {
                StructuredField::Meta => {
                    // positional entries have no name to route on
                    let Some(name) = key else { continue };
                    let value = limit_value(&value);
                    if is_present(&value) {
                        process_meta_entry(&name, &value, data);
                    }
                }
                StructuredField::Images => {
                    if let Some(img) = value.as_str().and_then(limit_img) {
                        data.push_image(img);
                    }
                }
                StructuredField::Embeds => {
                    if let Some(embed) = value.as_str().and_then(limit_embed) {
                        data.push_embed(embed);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_meta_with_positional_keys_is_dropped() {
        let payload = RequestPayload::default().with_post("_meta", json!(["Hello"]));
        let mut data = ExtractionResult::default();
        merge_structured(&payload, &mut data);
        assert!(data.meta.is_empty());
    }

    #[test]
    fn submitted_images_precede_meta_media() {
        let payload = RequestPayload::default()
            .with_post("_img", json!(["https://example.com/b.jpg"]))
            .with_post("_meta", json!({"og:image": "https://example.com/a.jpg"}));
        let mut data = ExtractionResult::default();
        merge_structured(&payload, &mut data);
        assert_eq!(
            data.images,
            vec!["https://example.com/b.jpg", "https://example.com/a.jpg"]
        );
    }

    #[test]
    fn meta_media_cannot_displace_full_image_list() {
        let images: Vec<String> = (0..50).map(|i| format!("https://example.com/{i}.jpg")).collect();
        let payload = RequestPayload::default()
            .with_post("_img", json!(&images))
            .with_post("_meta", json!({"og:image": "https://example.com/meta.jpg", "og:title": "T"}));
        let mut data = ExtractionResult::default();
        merge_structured(&payload, &mut data);

        assert_eq!(data.images, images);
        assert_eq!(data.meta.get("og:title").map(String::as_str), Some("T"));
    }

    #[test]
    fn structured_items_are_unslashed() {
        let payload = RequestPayload::default()
            .with_post("_meta", json!({"og:title": r"It\'s here"}));
        let mut data = ExtractionResult::default();
        merge_structured(&payload, &mut data);
        assert_eq!(data.meta.get("og:title").map(String::as_str), Some("It's here"));
    }

    #[test]
    fn structured_non_string_media_is_ignored() {
        let payload = RequestPayload::default().with_post("_img", json!([42, ["x"], null]));
        let mut data = ExtractionResult::default();
        merge_structured(&payload, &mut data);
        assert!(data.images.is_empty());
    }
}
