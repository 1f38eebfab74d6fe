//! HTML Tag Scanner
//!
//! Pulls candidates out of already-sanitized markup. Four bounded passes run
//! against the same [`ExtractionResult`]: `<meta>` first, then `<img>`,
//! `<iframe>` and `<link>`. Metadata goes first so media announced by the page
//! itself wins a slot in the capped lists ahead of incidental tags.

use regex::{Captures, Regex};
use tracing::debug;

use crate::bounds::{limit_items, limit_string, limit_url, MAX_KEY_BYTES};
use crate::classify::{limit_embed, limit_img, process_meta_entry};
use crate::patterns::{
    IFRAME_SRC, IFRAME_TAG, IMG_HEIGHT, IMG_SRC, IMG_TAG, IMG_WIDTH, LINK_REL_HREF, LINK_TAG,
    META_NAME_CONTENT, META_TAG,
};
use crate::result::{ExtractionResult, LinkRelation};

/// Images narrower than this (explicit `width`) are skipped.
pub const MIN_IMAGE_WIDTH: u64 = 256;

/// Images shorter than this (explicit `height`) are skipped.
pub const MIN_IMAGE_HEIGHT: u64 = 128;

/// Scan sanitized markup and merge everything found into `data`.
///
/// Each tag family is capped at the first 50 matches before any of them is
/// examined. Existing entries in `data` are kept and take precedence.
///
/// # Examples
///
/// ```
/// use press_scan::result::ExtractionResult;
/// use press_scan::scanner::scan_sanitized_html;
///
/// let html = r#"<meta property="og:title" content="Hello">
/// <img src="https://example.com/photo.jpg" width="400" height="300">"#;
///
/// let mut data = ExtractionResult::default();
/// scan_sanitized_html(html, &mut data);
///
/// assert_eq!(data.meta.get("og:title").map(String::as_str), Some("Hello"));
/// assert_eq!(data.images, vec!["https://example.com/photo.jpg"]);
/// ```
pub fn scan_sanitized_html(html: &str, data: &mut ExtractionResult) {
    scan_meta(html, data);
    scan_images(html, data);
    scan_iframes(html, data);
    scan_links(html, data);
}

fn scan_meta(html: &str, data: &mut ExtractionResult) {
    for tag in limit_items(META_TAG.find_iter(html)) {
        let Some(caps) = META_NAME_CONTENT.captures(tag.as_str()) else {
            continue;
        };

        let name = limit_string(&caps[1]);
        let value = limit_string(&caps[2]);

        if name.len() > MAX_KEY_BYTES {
            debug!(bytes = name.len(), "meta name too long");
            continue;
        }

        process_meta_entry(&name, &value, data);
    }
}

fn scan_images(html: &str, data: &mut ExtractionResult) {
    for tag in limit_items(IMG_TAG.find_iter(html)) {
        let tag = tag.as_str();

        if is_small_image(tag) {
            continue;
        }

        if let Some(src) = quoted_value(&IMG_SRC, tag).and_then(limit_img) {
            data.push_image(src);
        }
    }
}

fn scan_iframes(html: &str, data: &mut ExtractionResult) {
    for tag in limit_items(IFRAME_TAG.find_iter(html)) {
        if let Some(src) = quoted_value(&IFRAME_SRC, tag.as_str()).and_then(limit_embed) {
            data.push_embed(src);
        }
    }
}

fn scan_links(html: &str, data: &mut ExtractionResult) {
    for tag in limit_items(LINK_TAG.find_iter(html)) {
        let Some(caps) = LINK_REL_HREF.captures(tag.as_str()) else {
            continue;
        };

        let Some(relation) = LinkRelation::parse(&caps[1]) else {
            continue;
        };

        if let Some(url) = limit_url(&caps[2]) {
            data.insert_link(relation, url);
        }
    }
}

/// Explicit dimensions below the minimums mark an icon or spacer.
///
/// Values too large to parse are treated as "big enough".
fn is_small_image(tag: &str) -> bool {
    let below = |pattern: &Regex, min: u64| {
        quoted_value(pattern, tag)
            .and_then(|v| v.parse::<u64>().ok())
            .is_some_and(|v| v < min)
    };

    below(&IMG_WIDTH, MIN_IMAGE_WIDTH) || below(&IMG_HEIGHT, MIN_IMAGE_HEIGHT)
}

/// First match of a `(?:"(..)"|'(..)')` style pattern, whichever quote matched.
fn quoted_value<'h>(pattern: &Regex, haystack: &'h str) -> Option<&'h str> {
    pattern
        .captures(haystack)
        .as_ref()
        .and_then(either_group)
}

fn either_group<'h>(caps: &Captures<'h>) -> Option<&'h str> {
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}
