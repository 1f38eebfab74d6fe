//! Meta Classifier
//!
//! Routes one `<meta>` name/value pair: text metadata goes to the meta map,
//! media-bearing keys go through the embed or image classifier, and every
//! other key is ignored.

use crate::classify::{limit_embed, limit_img};
use crate::patterns::META_TEXT_KEY;
use crate::result::ExtractionResult;

/// Meta keys whose value is a candidate embed.
const EMBED_KEYS: &[&str] = &["og:url", "og:video", "og:video:secure_url"];

/// Meta keys whose value is a candidate image.
const IMAGE_KEYS: &[&str] = &[
    "og:image",
    "og:image:secure_url",
    "twitter:image0:src",
    "twitter:image0",
    "twitter:image:src",
    "twitter:image",
];

/// Where a meta key's value ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaRoute {
    /// Stored in [`ExtractionResult::meta`].
    Text,
    /// Canonicalized into [`ExtractionResult::embeds`].
    Embed,
    /// Filtered into [`ExtractionResult::images`].
    Image,
    /// Dropped.
    Ignored,
}

/// Decide the route for a meta key. Key matching is case-sensitive.
#[must_use]
pub fn route(name: &str) -> MetaRoute {
    if META_TEXT_KEY.is_match(name) {
        MetaRoute::Text
    } else if EMBED_KEYS.contains(&name) {
        MetaRoute::Embed
    } else if IMAGE_KEYS.contains(&name) {
        MetaRoute::Image
    } else {
        MetaRoute::Ignored
    }
}

/// Apply one already-bounded meta name/value pair to `data`.
pub fn process_meta_entry(name: &str, value: &str, data: &mut ExtractionResult) {
    match route(name) {
        MetaRoute::Text => data.insert_meta(name.to_string(), value.to_string()),
        MetaRoute::Embed => {
            if let Some(embed) = limit_embed(value) {
                data.push_embed(embed);
            }
        }
        MetaRoute::Image => {
            if let Some(img) = limit_img(value) {
                data.push_image(img);
            }
        }
        MetaRoute::Ignored => {}
    }
}
