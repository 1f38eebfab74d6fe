//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` used by the allow-list sanitizer. Only the
//! handful of read-only operations the sanitizer needs live here.

pub use dom_query::{Document, Selection};

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}
