//! Embed Canonicalizer
//!
//! Embeds are allow-listed: known player URLs are rewritten to the public
//! watch page of their host, a fixed set of already-public shapes is kept
//! verbatim, and everything else is dropped.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::bounds::limit_url;
use crate::patterns::{
    DAILYMOTION_EMBED, NATIVE_EMBEDS, VIMEO_MOOGALOOP, VIMEO_PLAYER, VINE_EMBED, YOUTUBE_EMBED,
};

/// A player URL shape and how to rebuild its public URL.
struct Rewrite {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    rebuild: fn(&Captures<'_>) -> Option<String>,
}

static REWRITES: [Rewrite; 5] = [
    Rewrite {
        name: "youtube",
        pattern: &YOUTUBE_EMBED,
        rebuild: youtube_url,
    },
    Rewrite {
        name: "vimeo-player",
        pattern: &VIMEO_PLAYER,
        rebuild: vimeo_url,
    },
    Rewrite {
        name: "vimeo-moogaloop",
        pattern: &VIMEO_MOOGALOOP,
        rebuild: vimeo_url,
    },
    Rewrite {
        name: "vine",
        pattern: &VINE_EMBED,
        rebuild: vine_url,
    },
    Rewrite {
        name: "dailymotion",
        pattern: &DAILYMOTION_EMBED,
        rebuild: dailymotion_url,
    },
];

#[allow(clippy::unnecessary_wraps)]
fn youtube_url(caps: &Captures<'_>) -> Option<String> {
    Some(format!("https://www.youtube.com/watch?v={}", &caps[1]))
}

/// Clip ids are numeric; leading zeros are normalised away.
fn vimeo_url(caps: &Captures<'_>) -> Option<String> {
    let id: u64 = caps[1].parse().ok()?;
    Some(format!("https://vimeo.com/{id}"))
}

#[allow(clippy::unnecessary_wraps)]
fn vine_url(caps: &Captures<'_>) -> Option<String> {
    Some(format!("https://vine.co/v/{}", &caps[1]))
}

#[allow(clippy::unnecessary_wraps)]
fn dailymotion_url(caps: &Captures<'_>) -> Option<String> {
    Some(format!("https://www.dailymotion.com/video/{}", &caps[1]))
}

/// Bound an embed URL and canonicalize it, or drop it.
///
/// # Examples
/// ```
/// use press_scan::classify::limit_embed;
///
/// assert_eq!(
///     limit_embed("https://www.youtube.com/embed/abc123?x=1").as_deref(),
///     Some("https://www.youtube.com/watch?v=abc123")
/// );
/// assert_eq!(limit_embed("https://player.vimeo.com/video/555").as_deref(), Some("https://vimeo.com/555"));
/// assert_eq!(limit_embed("https://example.com/video.mp4"), None);
/// ```
#[must_use]
pub fn limit_embed(src: &str) -> Option<String> {
    let src = limit_url(src)?;

    for rewrite in &REWRITES {
        if let Some(caps) = rewrite.pattern.captures(&src) {
            let canonical = (rewrite.rebuild)(&caps);
            if canonical.is_none() {
                debug!(rule = rewrite.name, url = %src, "embed id rejected");
            }
            return canonical;
        }
    }

    if NATIVE_EMBEDS.iter().any(|pattern| pattern.is_match(&src)) {
        return Some(src);
    }

    debug!(url = %src, "embed host not allow-listed");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embed(src: &str) -> Option<String> {
        limit_embed(src)
    }

    #[test]
    fn youtube_player_paths() {
        assert_eq!(
            embed("https://www.youtube.com/embed/abc123?x=1").as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
        assert_eq!(
            embed("//www.youtube.com/v/XyZ_-9").as_deref(),
            Some("https://www.youtube.com/watch?v=XyZ_-9")
        );
    }

    #[test]
    fn vimeo_player_and_legacy_flash() {
        assert_eq!(embed("https://player.vimeo.com/video/555").as_deref(), Some("https://vimeo.com/555"));
        assert_eq!(
            embed("https://player.vimeo.com/video/00555?autoplay=1").as_deref(),
            Some("https://vimeo.com/555")
        );
        assert_eq!(
            embed("http://vimeo.com/moogaloop.swf?clip_id=1234").as_deref(),
            Some("https://vimeo.com/1234")
        );
        assert_eq!(embed("https://player.vimeo.com/video/abc"), None);
    }

    #[test]
    fn vine_and_dailymotion() {
        assert_eq!(embed("https://vine.co/v/hBFxLqzV/embed/simple").as_deref(), Some("https://vine.co/v/hBFxLqzV"));
        assert_eq!(
            embed("//www.dailymotion.com/embed/video/x2jvvep?autoplay=1").as_deref(),
            Some("https://www.dailymotion.com/video/x2jvvep")
        );
        assert_eq!(
            embed("https://dailymotion.com/embed/video/x2jvvep").as_deref(),
            Some("https://www.dailymotion.com/video/x2jvvep")
        );
    }

    #[test]
    fn native_shapes_kept_verbatim() {
        for src in [
            "https://www.youtube.com/watch?v=abc",
            "https://m.youtube.com/watch?v=abc&t=10",
            "https://youtu.be/abc",
            "https://vimeo.com/98765",
            "https://www.dailymotion.com/video/x2jvvep",
            "https://soundcloud.com/artist/track",
            "https://twitter.com/someone/status/123456789",
            "https://vine.co/v/hBFxLqzV",
        ] {
            assert_eq!(embed(src).as_deref(), Some(src), "{src}");
        }
    }

    #[test]
    fn unknown_hosts_rejected() {
        assert_eq!(embed("https://example.com/video.mp4"), None);
        assert_eq!(embed("https://vimeo.com/channels/staffpicks"), None);
        assert_eq!(embed("https://twitter.com/someone"), None);
        assert_eq!(embed("javascript:alert(1)"), None);
    }
}
