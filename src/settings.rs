//! Site settings handed to the editor alongside the extracted data.

use serde::{Deserialize, Serialize};

use crate::result::ExtractionResult;
use crate::text::escape_attr;

/// Client protocol version; bookmarklets older than this show an update notice.
pub const SETTINGS_VERSION: &str = "6";

const QUOTE_TEMPLATE: &str = "<blockquote>%1$s</blockquote>";
const LINK_TEMPLATE: &str = r#"<p>Source: <em><a href="%1$s">%2$s</a></em></p>"#;

/// Markup templates used by the editor to cite the source.
///
/// `quote` takes the quoted text as `%1$s`; `link` takes the href as `%1$s`
/// and the link text as `%2$s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedHtml {
    pub quote: String,
    pub link: String,
}

impl Default for SuggestedHtml {
    fn default() -> Self {
        Self {
            quote: QUOTE_TEMPLATE.to_string(),
            link: LINK_TEMPLATE.to_string(),
        }
    }
}

impl SuggestedHtml {
    /// Fill the quote template. The text is HTML-escaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use press_scan::settings::SuggestedHtml;
    ///
    /// let html = SuggestedHtml::default();
    /// assert_eq!(html.render_quote("a < b"), "<blockquote>a &lt; b</blockquote>");
    /// ```
    #[must_use]
    pub fn render_quote(&self, text: &str) -> String {
        fill(&self.quote, &[escape_attr(text)])
    }

    /// Fill the link template. Both arguments are HTML-escaped.
    #[must_use]
    pub fn render_link(&self, href: &str, text: &str) -> String {
        fill(&self.link, &[escape_attr(href), escape_attr(text)])
    }
}

/// Substitute positional `%N$s` placeholders in one pass.
///
/// Unknown positions and stray `%` signs are copied through.
fn fill(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let arg = tail
            .get(1..2)
            .filter(|_| tail.get(2..4) == Some("$s"))
            .and_then(|digit| digit.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| args.get(i));

        if let Some(arg) = arg {
            out.push_str(arg);
            rest = &tail[4..];
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Settings block sent to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub version: String,
    pub redir_in_parent: bool,
    pub html: SuggestedHtml,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION.to_string(),
            redir_in_parent: false,
            html: SuggestedHtml::default(),
        }
    }
}

/// Everything the editor needs to start: extracted data plus site settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorBootstrap {
    pub data: ExtractionResult,
    pub config: SiteSettings,
}
