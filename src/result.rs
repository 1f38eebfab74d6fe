//! Result types for extraction output.
//!
//! [`ExtractionResult`] is the single aggregate produced per request. Its
//! insertion helpers enforce the collection invariants (non-empty, no
//! duplicates, capped, first-write-wins links) so no caller can break them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bounds::MAX_ITEMS;

/// Link relations retained from `<link>` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LinkRelation {
    #[serde(rename = "alternate")]
    Alternate,
    #[serde(rename = "thumbnailUrl")]
    ThumbnailUrl,
    #[serde(rename = "url")]
    Url,
}

impl LinkRelation {
    /// Parse a `rel`/`itemprop` token. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "alternate" => Some(Self::Alternate),
            "thumbnailUrl" => Some(Self::ThumbnailUrl),
            "url" => Some(Self::Url),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alternate => "alternate",
            Self::ThumbnailUrl => "thumbnailUrl",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content candidates for a draft post.
///
/// Serializes to the nested mapping consumed by the editor: scalar fields
/// under their short names (`u`, `s`, `t`, `v`, `_version`) and the
/// collections under `_meta`, `_img`, `_embed`, `_links`. When `errors` is
/// non-empty the fetch failed and every other field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Source URL (`u`).
    #[serde(rename = "u", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Text selected on the source page (`s`).
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,

    /// Title supplied by the client (`t`).
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Embed hint supplied by the client (`v`).
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub embed_hint: Option<String>,

    /// Client protocol version (`_version`).
    #[serde(rename = "_version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Title/description/keywords metadata, keyed by meta name.
    #[serde(rename = "_meta", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,

    /// Qualified, relevant image URLs in discovery order.
    #[serde(rename = "_img", default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// Canonical embed URLs in discovery order.
    #[serde(rename = "_embed", default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<String>,

    /// One URL per retained link relation; first discovery wins.
    #[serde(rename = "_links", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<LinkRelation, String>,

    /// Fetch failure messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ExtractionResult {
    /// A result carrying only fetch failure messages.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// Whether the fetch step failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Append an image URL unless empty, already present or the list is full.
    ///
    /// Returns `true` if the URL was added.
    pub fn push_image(&mut self, url: String) -> bool {
        push_unique(&mut self.images, url)
    }

    /// Append an embed URL unless empty, already present or the list is full.
    ///
    /// Returns `true` if the URL was added.
    pub fn push_embed(&mut self, url: String) -> bool {
        push_unique(&mut self.embeds, url)
    }

    /// Fill a link slot if it is still empty. Later discoveries are dropped.
    ///
    /// Returns `true` if the slot was filled.
    pub fn insert_link(&mut self, relation: LinkRelation, url: String) -> bool {
        if url.is_empty() || self.links.contains_key(&relation) {
            return false;
        }
        self.links.insert(relation, url);
        true
    }

    /// Store a metadata value. Later values for the same key replace earlier ones.
    pub fn insert_meta(&mut self, key: String, value: String) {
        self.meta.insert(key, value);
    }
}

fn push_unique(list: &mut Vec<String>, url: String) -> bool {
    if url.is_empty() || list.len() >= MAX_ITEMS || list.contains(&url) {
        return false;
    }
    list.push(url);
    true
}
