use std::time::Duration;

use press_scan::{HttpFetcher, Options, DEFAULT_USER_AGENT};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert!(options.media_discovery);
    assert_eq!(options.fetch_timeout, Duration::from_secs(30));
    assert_eq!(options.max_redirects, 5);
    assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        media_discovery: false,
        ..Options::default()
    };

    assert!(!options.media_discovery);
    assert_eq!(options.fetch_timeout, Options::default().fetch_timeout);
}

#[test]
fn http_fetcher_builds_from_custom_options() {
    let options = Options {
        max_redirects: 0,
        user_agent: "tester/1.0".to_string(),
        ..Options::default()
    };
    assert!(HttpFetcher::new(&options).is_ok());
}
