//! Simple CLI that reads HTML from stdin and outputs the extraction result
//! as JSON to stdout.

use std::io::{self, Read};

use press_scan::extract_from_html;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .init();

    let mut raw = Vec::new();
    if io::stdin().read_to_end(&mut raw).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let html = press_scan::encoding::transcode_to_utf8(&raw);
    let data = extract_from_html(&html);

    println!("{}", serde_json::to_string(&data).unwrap_or_default());
}
