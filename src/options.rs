//! Configuration options for extraction.
//!
//! The `Options` struct controls the outward-facing knobs of the pipeline:
//! whether media discovery runs at all and how the remote fetch behaves.
//! The sanitization bounds themselves are fixed constants in [`crate::bounds`].

use std::time::Duration;

/// Default User-Agent sent with source fetches.
pub const DEFAULT_USER_AGENT: &str = concat!("press-scan/", env!("CARGO_PKG_VERSION"));

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use press_scan::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     fetch_timeout: Duration::from_secs(10),
///     ..Options::default()
/// };
/// assert!(options.media_discovery);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Discover images, embeds and metadata at all.
    ///
    /// When disabled, only the sanitized scalar fields (`u`, `s`, `t`, `v`,
    /// protocol version) are returned and no fetch is ever performed.
    ///
    /// Default: `true`
    pub media_discovery: bool,

    /// Upper bound for a single source fetch, connect through last byte.
    ///
    /// Default: `30s`
    pub fetch_timeout: Duration,

    /// Redirects followed before the fetch is treated as a download failure.
    ///
    /// Default: `5`
    pub max_redirects: usize,

    /// Response bodies beyond this many bytes are truncated before decoding.
    ///
    /// Default: `5 MiB`
    pub max_response_bytes: usize,

    /// User-Agent header for source fetches.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            media_discovery: true,
            fetch_timeout: Duration::from_secs(30),
            max_redirects: 5,
            max_response_bytes: 5 * 1024 * 1024,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Options {
    /// Defaults overlaid with `PRESS_SCAN_*` environment variables.
    ///
    /// Recognised: `PRESS_SCAN_MEDIA_DISCOVERY`, `PRESS_SCAN_FETCH_TIMEOUT_SECS`,
    /// `PRESS_SCAN_MAX_RESPONSE_BYTES`, `PRESS_SCAN_USER_AGENT`. Values that
    /// don't parse are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(flag) = var("PRESS_SCAN_MEDIA_DISCOVERY").and_then(|v| parse_flag(&v)) {
            opts.media_discovery = flag;
        }
        if let Some(secs) = var("PRESS_SCAN_FETCH_TIMEOUT_SECS").and_then(|v| v.parse::<u64>().ok()) {
            if secs > 0 {
                opts.fetch_timeout = Duration::from_secs(secs);
            }
        }
        if let Some(bytes) = var("PRESS_SCAN_MAX_RESPONSE_BYTES").and_then(|v| v.parse::<usize>().ok()) {
            opts.max_response_bytes = bytes;
        }
        if let Some(agent) = var("PRESS_SCAN_USER_AGENT") {
            opts.user_agent = agent;
        }

        opts
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
