//! Extension hooks.
//!
//! Hosts adjust pipeline behaviour by handing an implementation of [`Policy`]
//! to the [`Extractor`](crate::Extractor). Every hook has a pass-through
//! default, so implementors only override what they need.

use crate::result::ExtractionResult;
use crate::settings::SuggestedHtml;

/// Host-supplied overrides for the extraction pipeline.
pub trait Policy: Send + Sync {
    /// Final say on media discovery; receives the configured value.
    fn enable_media_discovery(&self, enabled: bool) -> bool {
        enabled
    }

    /// Rewrite the merged result before it is returned.
    fn filter_data(&self, data: ExtractionResult) -> ExtractionResult {
        data
    }

    /// Whether the editor should redirect its parent window after saving.
    fn redirect_in_parent(&self) -> bool {
        false
    }

    /// Adjust the HTML templates offered to the editor.
    fn suggested_html(&self, html: SuggestedHtml) -> SuggestedHtml {
        html
    }
}

/// The pass-through policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl Policy for DefaultPolicy {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_passes_everything_through() {
        let policy = DefaultPolicy;
        assert!(policy.enable_media_discovery(true));
        assert!(!policy.enable_media_discovery(false));
        assert!(!policy.redirect_in_parent());

        let data = ExtractionResult {
            title: Some("T".to_string()),
            ..ExtractionResult::default()
        };
        assert_eq!(policy.filter_data(data.clone()), data);
        assert_eq!(policy.suggested_html(SuggestedHtml::default()), SuggestedHtml::default());
    }
}
