//! Logging configuration
//!
//! Structured logging with tracing. Events go to stderr; stdout is reserved
//! for the key report.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Initialize logging with environment-based filtering
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("onion_auth_keygen=warn"));

    fmt()
        .with_env_filter(filter)
        // stdout carries only the four report lines
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

