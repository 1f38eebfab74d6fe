//! Size and length bounding primitives.
//!
//! Every value that enters the pipeline, whether from a caller payload or a
//! scanned document, passes through one of these functions first. They never
//! fail: out-of-bounds input is truncated (containers, plain strings) or
//! discarded entirely (URLs).

use serde_json::Value;

use crate::text::{decode_entities, sanitize_text};
use crate::url_utils::is_qualified_url;

/// Maximum elements taken from any container or match list.
pub const MAX_ITEMS: usize = 50;

/// Maximum characters kept from any string value.
pub const MAX_STRING_CHARS: usize = 5000;

/// URLs longer than this (in characters) are discarded, never truncated.
pub const MAX_URL_CHARS: usize = 2048;

/// Maximum byte length of a metadata key.
pub const MAX_KEY_BYTES: usize = 100;

/// Take at most [`MAX_ITEMS`] from any iterator, lazily.
pub fn limit_items<I: IntoIterator>(items: I) -> std::iter::Take<I::IntoIter> {
    items.into_iter().take(MAX_ITEMS)
}

/// Bound an untrusted container to its first [`MAX_ITEMS`] entries.
///
/// Arrays yield positional entries (`None` key), objects yield their keys in
/// insertion order. Numeric object keys (`"0"`, `"12"`) count as positional.
/// Anything that is not a container yields nothing.
#[must_use]
pub fn limit_array(value: &Value) -> Vec<(Option<&str>, &Value)> {
    match value {
        Value::Array(items) => limit_items(items).map(|v| (None, v)).collect(),
        Value::Object(map) => limit_items(map)
            .map(|(k, v)| {
                let key = if is_numeric_key(k) { None } else { Some(k.as_str()) };
                (key, v)
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Bound and clean a string.
///
/// Truncates to [`MAX_STRING_CHARS`] characters (never splitting a multibyte
/// character), decodes HTML entities, trims and strips markup/control
/// characters.
#[must_use]
pub fn limit_string(value: &str) -> String {
    let truncated = match value.char_indices().nth(MAX_STRING_CHARS) {
        Some((byte_idx, _)) => &value[..byte_idx],
        None => value,
    };

    sanitize_text(decode_entities(truncated).trim())
}

/// [`limit_string`] over an untrusted JSON value.
///
/// Numbers pass through in their string form, `true` becomes `"1"` and
/// `false` the empty string. Null and containers yield the empty string.
#[must_use]
pub fn limit_value(value: &Value) -> String {
    match value {
        Value::String(s) => limit_string(s),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        _ => String::new(),
    }
}

/// Bound and qualify a URL.
///
/// Returns `None` when the cleaned value is longer than [`MAX_URL_CHARS`],
/// is not absolute http(s)/protocol-relative, or contains a `"` or a space.
///
/// # Examples
///
/// ```
/// use press_scan::bounds::limit_url;
///
/// assert_eq!(limit_url("//example.com/x").as_deref(), Some("//example.com/x"));
/// assert_eq!(limit_url("javascript:alert(1)"), None);
/// ```
#[must_use]
pub fn limit_url(value: &str) -> Option<String> {
    let url = limit_string(value);

    if url.chars().count() > MAX_URL_CHARS {
        return None;
    }

    if !is_qualified_url(&url) {
        return None;
    }

    if url.contains('"') || url.contains(' ') {
        return None;
    }

    Some(url)
}

/// [`limit_url`] over an untrusted JSON value; only strings can qualify.
#[must_use]
pub fn limit_url_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => limit_url(s),
        _ => None,
    }
}

/// Bound a metadata key: cleaned, non-empty, at most [`MAX_KEY_BYTES`] bytes.
#[must_use]
pub fn limit_key(key: &str) -> Option<String> {
    let key = limit_string(key);
    if key.is_empty() || key.len() > MAX_KEY_BYTES {
        None
    } else {
        Some(key)
    }
}

/// Legacy "present" test: empty, `"0"` and the like count as absent.
#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

fn is_numeric_key(key: &str) -> bool {
    let digits = key.strip_prefix(['-', '+']).unwrap_or(key);
    let (whole, frac) = match digits.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (digits, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match frac {
        Some(frac) => {
            (!whole.is_empty() || !frac.is_empty()) && all_digits(whole) && all_digits(frac)
        }
        None => !whole.is_empty() && all_digits(whole),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn limit_array_caps_and_preserves_order() {
        let value = Value::Array((0..80).map(|i| json!(i)).collect());
        let items = limit_array(&value);
        assert_eq!(items.len(), MAX_ITEMS);
        assert_eq!(items[0].1, &json!(0));
        assert_eq!(items[49].1, &json!(49));
    }

    #[test]
    fn limit_array_rejects_scalars() {
        assert!(limit_array(&json!("not a list")).is_empty());
        assert!(limit_array(&json!(42)).is_empty());
        assert!(limit_array(&Value::Null).is_empty());
    }

    #[test]
    fn limit_array_object_keys() {
        let value = json!({"og:title": "A", "3": "B"});
        let items = limit_array(&value);
        assert_eq!(items[0].0, Some("og:title"));
        assert_eq!(items[1].0, None);
    }

    #[test]
    fn limit_string_truncates_by_character() {
        let long = "é".repeat(MAX_STRING_CHARS + 10);
        let limited = limit_string(&long);
        assert_eq!(limited.chars().count(), MAX_STRING_CHARS);
    }

    #[test]
    fn limit_string_decodes_then_cleans() {
        assert_eq!(limit_string("  Fish &amp; Chips  "), "Fish & Chips");
        assert_eq!(limit_string("&lt;b&gt;bold&lt;/b&gt;"), "bold");
        assert_eq!(limit_string("&Uuml;ber uns"), "\u{DC}ber uns");
    }

    #[test]
    fn limit_value_scalars() {
        assert_eq!(limit_value(&json!(12)), "12");
        assert_eq!(limit_value(&json!(1.5)), "1.5");
        assert_eq!(limit_value(&json!(true)), "1");
        assert_eq!(limit_value(&json!(false)), "");
        assert_eq!(limit_value(&json!(["x"])), "");
        assert_eq!(limit_value(&Value::Null), "");
    }

    #[test]
    fn limit_url_accepts_qualified() {
        assert_eq!(limit_url("//example.com/x").as_deref(), Some("//example.com/x"));
        assert_eq!(
            limit_url(" https://example.com/a?b=1&amp;c=2 ").as_deref(),
            Some("https://example.com/a?b=1&c=2")
        );
    }

    #[test]
    fn limit_url_rejects_bad_shapes() {
        assert_eq!(limit_url("javascript:alert(1)"), None);
        assert_eq!(limit_url("http://a.com/b?x=\"y\""), None);
        assert_eq!(limit_url("http://a.com/b?x=&quot;y&quot;"), None);
        assert_eq!(limit_url("http://a.com/b c.jpg"), None);
        assert_eq!(limit_url("/relative.jpg"), None);
    }

    #[test]
    fn limit_url_discards_over_length() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_CHARS));
        assert_eq!(limit_url(&url), None);

        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_CHARS - 20));
        assert_eq!(url.chars().count(), MAX_URL_CHARS);
        assert_eq!(limit_url(&url), Some(url));
    }

    #[test]
    fn limit_url_value_only_strings() {
        assert_eq!(limit_url_value(&json!(5)), None);
        assert_eq!(
            limit_url_value(&json!("https://example.com")).as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn limit_key_bounds() {
        assert_eq!(limit_key(" og:title ").as_deref(), Some("og:title"));
        assert_eq!(limit_key(""), None);
        assert_eq!(limit_key(&"k".repeat(MAX_KEY_BYTES + 1)), None);
    }

    #[test]
    fn numeric_keys() {
        assert!(is_numeric_key("0"));
        assert!(is_numeric_key("-12"));
        assert!(is_numeric_key("1.5"));
        assert!(!is_numeric_key("og:image"));
        assert!(!is_numeric_key(""));
        assert!(!is_numeric_key("."));
        assert!(!is_numeric_key("NaN"));
    }

    #[test]
    fn presence() {
        assert!(is_present("x"));
        assert!(!is_present(""));
        assert!(!is_present("0"));
    }
}
