//! Charset detection and transcoding for fetched documents.
//!
//! A `charset=` parameter on the HTTP `Content-Type` header wins; otherwise the
//! first 1024 bytes are searched for an in-document declaration; otherwise the
//! body is treated as UTF-8. Decoding is always lossy.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes searched for an in-document declaration.
const SNIFF_BYTES: usize = 1024;

/// `<meta charset="...">`
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("CHARSET_META_RE regex")
});

/// `<meta http-equiv="Content-Type" content="...; charset=...">`
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET_RE regex")
});

/// `charset=` parameter of a `Content-Type` header value.
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*"?([^";\s]+)"?"#).expect("HEADER_CHARSET_RE regex")
});

/// Detect the encoding declared inside an HTML document, defaulting to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_BYTES)]);

    [&*CHARSET_META_RE, &*HTTP_EQUIV_CHARSET_RE]
        .into_iter()
        .find_map(|re| label_encoding(re, &head))
        .unwrap_or(UTF_8)
}

/// Encoding named by a `Content-Type` header value, if any and if known.
#[must_use]
pub fn header_encoding(content_type: &str) -> Option<&'static Encoding> {
    label_encoding(&HEADER_CHARSET_RE, content_type)
}

fn label_encoding(re: &Regex, haystack: &str) -> Option<&'static Encoding> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Transcode HTML bytes to a UTF-8 string using the in-document declaration.
///
/// # Examples
///
/// ```
/// use press_scan::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><title>Caf\xE9</title>";
/// assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode_with(detect_encoding(html), html)
}

/// Transcode fetched bytes, preferring the charset from the response header.
#[must_use]
pub fn transcode_with_content_type(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(header_encoding)
        .unwrap_or_else(|| detect_encoding(body));
    decode_with(encoding, body)
}

fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> String {
    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}
