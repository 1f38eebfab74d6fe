//! Content image sideloading.
//!
//! Before a draft is saved, remote images referenced in its content are copied
//! into the site's media library and the `<img>` tags are swapped for the
//! local ones. The copying itself is a host concern behind
//! [`MediaSideloader`].

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::Result;
use crate::patterns::{CARRIED_IMG_ATTR, CONTENT_IMG_SRC, CONTENT_IMG_TAG, SIDELOADABLE_EXTENSION};
use crate::text::{escape_attr, unslash};

/// Copies a remote image into the media library.
#[async_trait]
pub trait MediaSideloader: Send + Sync {
    /// Ingest `image_url` for `post_id` and return the replacement `<img>` markup.
    ///
    /// # Errors
    ///
    /// Any error leaves the original tag in place.
    async fn sideload(&self, image_url: &str, post_id: u64) -> Result<String>;
}

/// Replace remote images in `content` with sideloaded copies.
///
/// Only tags whose `src` has a `jpg`/`jpeg`/`jpe`/`gif`/`png` extension and
/// whose (escaped) URL still appears in the content are considered. The
/// original tag's `class`, `width`, `height`, `id` and `alt` attributes are
/// carried over. Without upload permission the content is returned as is.
pub async fn side_load_images(
    content: &str,
    post_id: u64,
    sideloader: &dyn MediaSideloader,
    can_upload: bool,
) -> String {
    if !can_upload {
        return content.to_string();
    }

    let mut new_content = content.to_string();

    for image in CONTENT_IMG_TAG.find_iter(content).map(|m| m.as_str()) {
        let unslashed = unslash(image);
        let Some(image_url) = CONTENT_IMG_SRC
            .captures(&unslashed)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
        else {
            continue;
        };

        if !SIDELOADABLE_EXTENSION.is_match(&image_url) {
            debug!(url = %image_url, "no image extension, not sideloading");
            continue;
        }

        // images removed from the draft are not worth uploading
        if !new_content.contains(&escape_attr(&image_url)) {
            continue;
        }

        let upload = match sideloader.sideload(&image_url, post_id).await {
            Ok(markup) => markup.replace(r#" alt="""#, ""),
            Err(err) => {
                warn!(url = %image_url, error = %err, "sideload failed, keeping original image");
                continue;
            }
        };

        let upload = CARRIED_IMG_ATTR
            .find_iter(image)
            .fold(upload, |upload, attr| {
                upload.replace("<img", &format!("<img {}", attr.as_str()))
            });

        new_content = new_content.replace(image, &upload);
    }

    new_content
}
