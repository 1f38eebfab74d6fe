//! Fetch a page and print what the fallback extractor finds, as JSON.
//!
//! Usage: `scan_url <url>`
//!
//! Logging goes to stderr; set `RUST_LOG=debug` to see filter decisions.

use std::env;
use std::process::ExitCode;

use press_scan::{Extractor, Options, RequestPayload};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let Some(url) = env::args().nth(1) else {
        eprintln!("usage: scan_url <url>");
        return ExitCode::from(2);
    };

    let extractor = match Extractor::new(Options::from_env()) {
        Ok(extractor) => extractor,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let payload = RequestPayload::default().with_query("u", url);
    let data = extractor.merge_or_fetch(&payload).await;

    match serde_json::to_string_pretty(&data) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    if data.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
