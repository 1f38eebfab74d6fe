//! URL Utility Functions
//!
//! The URL Qualifier used by every bounding pass, plus the small amount of
//! parsing the fetch step needs to turn a qualified URL into a request target.

use url::Url;

use crate::patterns::QUALIFIED_URL;

/// Check whether a string is an absolute http(s) or protocol-relative URL.
///
/// Pure prefix test: no parsing, no network access. Relative paths,
/// `javascript:`, `data:` and every other scheme are rejected.
///
/// # Examples
/// ```
/// use press_scan::url_utils::is_qualified_url;
///
/// assert!(is_qualified_url("https://example.com/a.jpg"));
/// assert!(is_qualified_url("//cdn.example.com/a.jpg"));
/// assert!(!is_qualified_url("javascript:alert(1)"));
/// assert!(!is_qualified_url("/relative.jpg"));
/// ```
#[must_use]
pub fn is_qualified_url(s: &str) -> bool {
    QUALIFIED_URL.is_match(s)
}

/// Check if a string is a valid absolute http(s) URL with a host.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Turn a qualified URL into something an HTTP client can request.
///
/// Protocol-relative URLs are given the `https:` scheme.
///
/// # Returns
/// * `Some(Url)` for absolute http(s) URLs with a host, `None` otherwise
#[must_use]
pub fn fetchable_url(s: &str) -> Option<Url> {
    let s = s.trim();
    let candidate = if s.starts_with("//") {
        format!("https:{s}")
    } else {
        s.to_string()
    };

    match is_absolute_url(&candidate) {
        (true, url) => url,
        (false, _) => None,
    }
}

/// Extract hostname from URL for log fields.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    fetchable_url(url_str).and_then(|url| url.host_str().map(str::to_string))
}
