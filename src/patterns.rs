//! Compiled regex patterns for the extraction pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock`. They are
//! organized by the pipeline stage that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// URL Qualification
// =============================================================================

/// Absolute http(s) or protocol-relative URL prefix.
pub static QUALIFIED_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?:)?//").expect("QUALIFIED_URL regex"));

// =============================================================================
// Image Relevance Rules
// =============================================================================

/// Ordered image rejection rules as `(rule name, pattern)`.
///
/// First match wins. The legacy stats beacon (`/g.gif`) is a plain substring
/// test and lives in the image classifier itself.
pub static IMAGE_REJECT_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        // Ad slots: /ad/, /ads/, /adx/
        ("ad-slot", r"/ad[sx]?/"),
        // "Share this" style buttons
        ("share-button", r"/share-?this[^.]+?\.[a-z0-9]{3,4}(\?.*)?$"),
        // Plain loaders, spinners, spacers
        ("loader", r"/(spinner|loading|spacer|blank|rss)\.(gif|jpg|png)"),
        // Decorated loaders: ajax-loader-spinner.gif, blanks_2x.png ...
        (
            "decorated-loader",
            r"/([^./]+[-_])?(spinner|loading|spacer|blank)s?([-_][^./]+)?\.[a-z0-9]{3,4}",
        ),
        // Thumbnails, too small to be relevant
        ("thumbnail", r"([^./]+[-_])?thumb[^.]*\.(gif|jpg|png)$"),
        // Core interface images
        ("core-asset", r"/wp-includes/"),
        // Narrow images named by size, e.g. icon-12x40.png
        ("narrow-dimension", r"[^\d]\d{1,2}x\d+\.(gif|jpg|png)$"),
        // Tracking pixels
        ("tracking-pixel", r"/pixel\.(mathtag|quantserve)\.com"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("IMAGE_REJECT_RULES regex")))
    .collect()
});

/// Legacy stats beacon filename.
pub const STATS_BEACON: &str = "/g.gif";

// =============================================================================
// Embed Canonicalization
// =============================================================================

/// YouTube `/embed/<id>` and `/v/<id>` player paths.
pub static YOUTUBE_EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//www\.youtube\.com/(?:embed|v)/([^?]+)(?:\?.*)?$").expect("YOUTUBE_EMBED regex")
});

/// Vimeo player path with numeric clip id.
pub static VIMEO_PLAYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//player\.vimeo\.com/video/(\d+)([?/].*)?$").expect("VIMEO_PLAYER regex")
});

/// Legacy Vimeo flash endpoint.
pub static VIMEO_MOOGALOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//vimeo\.com/moogaloop\.swf\?clip_id=(\d+)$").expect("VIMEO_MOOGALOOP regex")
});

/// Vine embed path.
pub static VINE_EMBED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//vine\.co/v/([^/]+)/embed").expect("VINE_EMBED regex"));

/// Dailymotion embed path.
pub static DAILYMOTION_EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//(?:www\.)?dailymotion\.com/embed/video/([^/?]+)([/?].+)?")
        .expect("DAILYMOTION_EMBED regex")
});

/// Embed URL shapes accepted without rewriting.
pub static NATIVE_EMBEDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"//(m\.|www\.)?youtube\.com/watch\?",
        r"/youtu\.be/.+$",
        r"//vimeo\.com/\d+$",
        r"//(www\.)?dailymotion\.com/video/.+$",
        r"//soundcloud\.com/.+$",
        r"//twitter\.com/[^/]+/status/\d+$",
        r"//vine\.co/v/[^/]+",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("NATIVE_EMBEDS regex"))
    .collect()
});

// =============================================================================
// Meta Classification
// =============================================================================

/// Metadata keys stored verbatim: `title`, `og:description`, `keywords`...
pub static META_TEXT_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":?(title|description|keywords)$").expect("META_TEXT_KEY regex")
});

// =============================================================================
// Tag Scanning
// =============================================================================

pub static META_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<meta [^>]+>").expect("META_TAG regex"));

pub static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img [^>]+>").expect("IMG_TAG regex"));

pub static IFRAME_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<iframe [^>]+>").expect("IFRAME_TAG regex"));

pub static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<link [^>]+>").expect("LINK_TAG regex"));

/// `property="…"`/`name="…"` followed by `content="…"` within one meta tag.
pub static META_NAME_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:property|name)="([^"]+)"[^>]+content="([^"]+)""#)
        .expect("META_NAME_CONTENT regex")
});

/// Explicit image width in either quote style.
pub static IMG_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)width=(?:"(\d+)"|'(\d+)')"#).expect("IMG_WIDTH regex")
});

/// Explicit image height in either quote style.
pub static IMG_HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)height=(?:"(\d+)"|'(\d+)')"#).expect("IMG_HEIGHT regex")
});

/// Image `src`, case-insensitive attribute name.
pub static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)src=(?:"([^'"]+)"|'([^'"]+)')"#).expect("IMG_SRC regex")
});

/// Iframe `src`.
pub static IFRAME_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"src=(?:"([^'"]+)"|'([^'"]+)')"#).expect("IFRAME_SRC regex")
});

/// `rel="…"`/`itemprop="…"` followed by `href="…"` within one link tag.
pub static LINK_REL_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:rel|itemprop)="([^"]+)"[^>]+href="([^"]+)""#).expect("LINK_REL_HREF regex")
});

// =============================================================================
// Text Cleaning
// =============================================================================

/// `<script>` and `<style>` blocks including their contents.
pub static SCRIPT_STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>")
        .expect("SCRIPT_STYLE_BLOCK regex")
});

/// Anything shaped like a tag: `<a ...>`, `</p>`, `<!-- ... >`, `<?xml ...>`.
pub static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z/!?][^>]*>").expect("MARKUP_TAG regex"));

/// Runs of line breaks, tabs and spaces.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("WHITESPACE_RUN regex"));


// =============================================================================
// Content Images (sideloading)
// =============================================================================

/// Any `<img …>` in post content.
pub static CONTENT_IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img [^>]+>").expect("CONTENT_IMG_TAG regex"));

/// Quoted `src` inside a content image tag.
pub static CONTENT_IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"src=["']([^"']+)["']"#).expect("CONTENT_IMG_SRC regex")
});

/// Image URLs with an extension the media library accepts.
pub static SIDELOADABLE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[^?]+\.(jpe?g|jpe|gif|png)\b").expect("SIDELOADABLE_EXTENSION regex")
});

/// Presentation attributes carried from the original tag, optionally slashed.
pub static CARRIED_IMG_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:class|width|height|id|alt)=\\?(?:"[^"']+\\?"|'[^"']+\\?')"#)
        .expect("CARRIED_IMG_ATTR regex")
});
