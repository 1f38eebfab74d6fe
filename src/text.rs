//! Text-level cleanup shared by every sanitizing path.
//!
//! - [`decode_entities`]: HTML character references to characters
//! - [`sanitize_text`]: strip markup and control characters, normalize whitespace
//! - [`unslash`]: undo backslash escaping sent by legacy clients

use html_escape::decode_html_entities;

use crate::patterns::{MARKUP_TAG, SCRIPT_STYLE_BLOCK, WHITESPACE_RUN};

/// Decode HTML character references (`&amp;`, `&#39;`, `&#x2014;`, `&Uuml;`...).
///
/// The full HTML named-reference set is understood. Unknown names are left
/// exactly as written.
///
/// # Examples
///
/// ```
/// use press_scan::text::decode_entities;
///
/// assert_eq!(decode_entities("Tom &amp; Jerry&#39;s"), "Tom & Jerry's");
/// assert_eq!(decode_entities("&bogus;"), "&bogus;");
/// ```
#[must_use]
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    decode_html_entities(input).into_owned()
}

/// Reduce arbitrary text to a single clean line.
///
/// Script/style blocks and anything tag-shaped are removed, a stray `<` is
/// neutralised as `&lt;`, whitespace runs collapse to one space, remaining
/// control characters are dropped and the result is trimmed.
///
/// Percent-encoded octets are left alone so URLs survive intact.
#[must_use]
pub fn sanitize_text(input: &str) -> String {
    let mut text = input.to_string();

    if text.contains('<') {
        text = SCRIPT_STYLE_BLOCK.replace_all(&text, "").into_owned();
        text = MARKUP_TAG.replace_all(&text, "").into_owned();
        text = text.replace('<', "&lt;");
    }

    let collapsed = WHITESPACE_RUN.replace_all(&text, " ");
    collapsed
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Remove one level of backslash escaping.
///
/// `\'` → `'`, `\"` → `"`, `\\` → `\`; a trailing lone backslash is dropped.
///
/// # Examples
///
/// ```
/// use press_scan::text::unslash;
///
/// assert_eq!(unslash(r#"O\'Reilly \"quoted\" C:\\dir"#), r#"O'Reilly "quoted" C:\dir"#);
/// ```
#[must_use]
pub fn unslash(input: &str) -> String {
    if !input.contains('\\') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('0') => out.push('\0'),
                Some(next) => out.push(next),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Escape text for use inside a double-quoted HTML attribute.
///
/// Line breaks and tabs become character references so the output stays on
/// one line.
#[must_use]
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_numeric_and_named() {
        assert_eq!(decode_entities("&#8220;Hi&#x201D;"), "\u{201C}Hi\u{201D}");
        assert_eq!(decode_entities("caf&eacute; &amp; bar"), "caf\u{e9} & bar");
        assert_eq!(decode_entities("&quot;q&quot; &#039;s&#039;"), "\"q\" 's'");
    }

    #[test]
    fn decode_leaves_unknown_names() {
        assert_eq!(decode_entities("&zzzz; AT&T"), "&zzzz; AT&T");
    }

    #[test]
    fn decode_full_named_set() {
        assert_eq!(decode_entities("&Uuml;ber uns"), "\u{DC}ber uns");
        assert_eq!(decode_entities("M&Ouml;TLEY"), "M\u{D6}TLEY");
        assert_eq!(decode_entities("&Agrave; &aring;"), "\u{C0} \u{E5}");
        assert_eq!(decode_entities("I &hearts; it &rarr; next"), "I \u{2665} it \u{2192} next");
    }

    #[test]
    fn decode_is_single_pass() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn sanitize_strips_markup() {
        assert_eq!(sanitize_text("<b>Bold</b> text"), "Bold text");
        assert_eq!(
            sanitize_text("before<script>alert(1)</script>after"),
            "beforeafter"
        );
        assert_eq!(sanitize_text("<style>p{}</style>Styled"), "Styled");
    }

    #[test]
    fn sanitize_neutralises_stray_less_than() {
        assert_eq!(sanitize_text("1 < 2"), "1 &lt; 2");
    }

    #[test]
    fn sanitize_collapses_whitespace_and_controls() {
        assert_eq!(sanitize_text("  a\r\n\tb   c \u{0007} "), "a b c");
    }

    #[test]
    fn sanitize_keeps_percent_octets() {
        assert_eq!(
            sanitize_text("https://example.com/a%20b.jpg"),
            "https://example.com/a%20b.jpg"
        );
    }

    #[test]
    fn unslash_handles_edges() {
        assert_eq!(unslash("plain"), "plain");
        assert_eq!(unslash(r"trailing\"), "trailing");
        assert_eq!(unslash(r"\\\'"), r"\'");
    }

    #[test]
    fn escape_attr_round_trips_with_decode() {
        let raw = "a \"b\" & <c>\r\n\td";
        assert_eq!(decode_entities(&escape_attr(raw)), raw);
    }
}
