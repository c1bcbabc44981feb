// src/lib.rs

pub mod cli;
pub mod errors;
pub mod logging;
pub mod watch;

use std::io::Write;

use anyhow::Result;
use chrono::Local;

use crate::cli::CliArgs;
use crate::watch::{GlobRule, NotifySource, WatchSpec, Watcher};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - glob resolution from the parsed arguments
/// - the change-printing listener
/// - Ctrl-C handling
/// - the monitoring loop
pub async fn run(args: CliArgs) -> Result<()> {
    let rule = GlobRule {
        glob: None,
        extension: args.extension,
    };
    let spec = WatchSpec::new(args.directories, rule)?;

    let mut watcher = Watcher::new(spec);
    say(&format!(
        "Watching '{}' for '{}'.",
        watcher.spec().path(),
        watcher.spec().glob()
    ));

    watcher.on_change(|| say("Change detected."));

    // Ctrl-C → graceful stop; the handler only flags intent.
    let stop = watcher.stop_handle();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("fswatch: failed to listen for Ctrl+C: {e}");
            return;
        }
        stop.stop();
    });

    watcher.run(&NotifySource).await;
    Ok(())
}

/// Print one protocol line to stdout, flushed immediately so downstream
/// consumers see each change without buffering delay.
fn say(message: &str) {
    let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "fswatch: [{ts}] {message}");
    let _ = out.flush();
}
