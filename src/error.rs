//! Error types for press-scan.
//!
//! Sanitization never fails: malformed input is dropped or emptied in place.
//! The only failures that reach a caller are fetch failures (surfaced as data
//! inside [`crate::ExtractionResult::errors`]) and collaborator setup problems.

/// Failure of the remote fetch step.
///
/// The two variants map to the two distinct messages shown to users: the
/// document could not be downloaded at all, or it was downloaded but nothing
/// usable came back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport or download failure (DNS, TLS, timeout, non-200 status...).
    #[error("Error: Could not download the source URL (native error: {0}).")]
    Download(String),

    /// The download finished but the body was empty or unreadable.
    #[error("Error: Could not read the content downloaded from the source URL.")]
    Unreadable,
}

/// Error type for press-scan operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetching the source document failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    /// The media-ingestion collaborator rejected an image.
    #[error("Sideload failed: {0}")]
    Sideload(String),
}

/// Result type alias for press-scan operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_messages_are_distinct() {
        let download = FetchError::Download("connection refused".to_string()).to_string();
        let unreadable = FetchError::Unreadable.to_string();

        assert_eq!(
            download,
            "Error: Could not download the source URL (native error: connection refused)."
        );
        assert_ne!(download, unreadable);
    }

    #[test]
    fn fetch_error_converts_into_crate_error() {
        let err: Error = FetchError::Unreadable.into();
        assert!(matches!(err, Error::Fetch(FetchError::Unreadable)));
    }
}
