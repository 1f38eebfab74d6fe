//! Image Relevance Filter
//!
//! Separates content images from ad slots, loaders, thumbnails, interface
//! chrome and tracking pixels using URL shape alone.

use tracing::debug;

use crate::bounds::limit_url;
use crate::patterns::{IMAGE_REJECT_RULES, STATS_BEACON};

/// Bound an image URL and keep it only if it looks like content.
///
/// # Examples
/// ```
/// use press_scan::classify::limit_img;
///
/// assert_eq!(limit_img("http://site.com/photo.jpg").as_deref(), Some("http://site.com/photo.jpg"));
/// assert_eq!(limit_img("http://site.com/ads/banner.png"), None);
/// assert_eq!(limit_img("http://site.com/icon-12x40.png"), None);
/// ```
#[must_use]
pub fn limit_img(src: &str) -> Option<String> {
    let src = limit_url(src)?;

    if let Some(rule) = image_rejection(&src) {
        debug!(rule, url = %src, "image rejected");
        return None;
    }

    Some(src)
}

/// Name of the first rejection rule an image URL trips, if any.
#[must_use]
pub fn image_rejection(src: &str) -> Option<&'static str> {
    IMAGE_REJECT_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(src))
        .map(|(name, _)| *name)
        .or_else(|| src.contains(STATS_BEACON).then_some("stats-beacon"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(src: &str) -> Option<&'static str> {
        image_rejection(src)
    }

    #[test]
    fn accepts_plain_content_images() {
        for src in [
            "http://site.com/photo.jpg",
            "https://cdn.example.com/2024/05/lake-at-dawn.png",
            "//images.example.org/hero.webp?w=1200",
            "https://example.com/adventure/map.jpg",
        ] {
            assert_eq!(rule(src), None, "{src}");
            assert_eq!(limit_img(src).as_deref(), Some(src));
        }
    }

    #[test]
    fn rejects_ad_slots() {
        assert_eq!(rule("http://site.com/ads/banner.png"), Some("ad-slot"));
        assert_eq!(rule("http://site.com/adx/1.gif"), Some("ad-slot"));
        assert_eq!(rule("http://site.com/ad/slot.jpg"), Some("ad-slot"));
    }

    #[test]
    fn rejects_share_buttons() {
        assert_eq!(rule("http://site.com/img/sharethis_button.png"), Some("share-button"));
        assert_eq!(rule("http://site.com/img/share-this-large.gif?v=2"), Some("share-button"));
    }

    #[test]
    fn rejects_loaders_and_spacers() {
        assert_eq!(rule("http://site.com/img/spinner.gif"), Some("loader"));
        assert_eq!(rule("http://site.com/rss.png"), Some("loader"));
        assert_eq!(rule("http://site.com/img/ajax-loading.svg"), Some("decorated-loader"));
        assert_eq!(rule("http://site.com/img/blanks_2x.webp"), Some("decorated-loader"));
    }

    #[test]
    fn rejects_thumbnails() {
        assert_eq!(rule("http://site.com/uploads/post-thumb.jpg"), Some("thumbnail"));
        assert_eq!(rule("http://site.com/uploads/thumbnail_small.png"), Some("thumbnail"));
    }

    #[test]
    fn rejects_core_assets() {
        assert_eq!(rule("http://site.com/wp-includes/images/smilies/smile.png"), Some("core-asset"));
    }

    #[test]
    fn rejects_narrow_dimension_names() {
        assert_eq!(rule("http://site.com/icon-12x40.png"), Some("narrow-dimension"));
        assert_eq!(rule("http://site.com/button_9x300.gif"), Some("narrow-dimension"));
        assert_eq!(rule("http://site.com/photo-640x480.jpg"), None);
    }

    #[test]
    fn rejects_tracking() {
        assert_eq!(rule("https://pixel.quantserve.com/pixel/p-1.gif"), Some("tracking-pixel"));
        assert_eq!(rule("http://pixel.mathtag.com/event/img"), Some("tracking-pixel"));
        assert_eq!(rule("https://stats.example.com/g.gif?v=ext"), Some("stats-beacon"));
    }

    #[test]
    fn unqualified_urls_never_reach_the_rules() {
        assert_eq!(limit_img("/relative/photo.jpg"), None);
        assert_eq!(limit_img("data:image/png;base64,AAAA"), None);
    }
}
