//! Allow-list markup sanitizer.
//!
//! Fetched documents are reduced to the four element families the tag
//! scanner looks at, each carrying only its allow-listed attributes:
//!
//! | element  | attributes                  |
//! |----------|-----------------------------|
//! | `img`    | `src`, `width`, `height`    |
//! | `iframe` | `src`                       |
//! | `link`   | `rel`, `itemprop`, `href`   |
//! | `meta`   | `property`, `name`, `content` |
//!
//! Everything else, text included, is dropped. Output is one element per
//! line in document order with attributes in the table's order and values
//! re-escaped, so the scanner always sees a predictable shape.

use crate::dom::{self, Document, Selection};
use crate::text::escape_attr;

/// Allowed elements and their allowed attributes, in output order.
pub const ALLOWED_MARKUP: &[(&str, &[&str])] = &[
    ("img", &["src", "width", "height"]),
    ("iframe", &["src"]),
    ("link", &["rel", "itemprop", "href"]),
    ("meta", &["property", "name", "content"]),
];

const ALLOWED_SELECTOR: &str = "img, iframe, link, meta";

/// Strip a document down to the allow-listed elements and attributes.
///
/// # Examples
///
/// ```
/// use press_scan::markup::sanitize_markup;
///
/// let html = r#"<p onclick="x()">Hi <img class="big" src="/a.jpg" width="400"></p>"#;
/// assert_eq!(sanitize_markup(html), "<img src=\"/a.jpg\" width=\"400\">\n");
/// ```
#[must_use]
pub fn sanitize_markup(html: &str) -> String {
    let doc = Document::from(html);
    let mut out = String::new();

    for node in doc.select(ALLOWED_SELECTOR).nodes() {
        let element = Selection::from(*node);
        let Some(tag) = dom::tag_name(&element) else {
            continue;
        };
        let Some((_, attributes)) = ALLOWED_MARKUP.iter().find(|(name, _)| *name == tag) else {
            continue;
        };

        out.push('<');
        out.push_str(&tag);
        for attr in *attributes {
            if let Some(value) = dom::get_attribute(&element, attr) {
                out.push(' ');
                out.push_str(attr);
                out.push_str("=\"");
                out.push_str(&escape_attr(&value));
                out.push('"');
            }
        }
        out.push_str(">\n");
    }

    out
}
