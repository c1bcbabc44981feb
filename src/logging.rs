// src/logging.rs

//! Logging setup for `fswatch` using `tracing` + `tracing-subscriber`.
//!
//! stdout carries the line-per-change protocol, so all diagnostics go to
//! stderr. The level comes from the `FSWATCH_LOG` environment variable
//! (e.g. "info", "debug"); default is `warn` so nothing is printed during
//! normal operation. There is no CLI flag for this: the CLI surface accepts
//! only `-t` and directories.

use anyhow::Result;
use tracing_subscriber::fmt;

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging() -> Result<()> {
    let level = std::env::var("FSWATCH_LOG")
        .ok()
        .and_then(|s| parse_level_str(&s))
        .unwrap_or(tracing::Level::WARN);

    fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
