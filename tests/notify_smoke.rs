//! End-to-end smoke tests against the real `notify` backend.

use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fswatch::watch::{GlobRule, NotifySource, WatchSpec, Watcher};

type TestResult = Result<(), Box<dyn Error>>;

/// Watcher on `spec` whose listener counts dispatches and stops on the first.
fn stop_on_first_change(spec: WatchSpec) -> (Watcher, Arc<AtomicUsize>) {
    let mut watcher = Watcher::new(spec);
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let stop = watcher.stop_handle();
    watcher.on_change(move || {
        seen.fetch_add(1, Ordering::SeqCst);
        stop.stop();
    });
    (watcher, count)
}

async fn run_with_writer(
    watcher: &Watcher,
    target: std::path::PathBuf,
) -> Result<(), tokio::time::error::Elapsed> {
    // Keep touching the file until the watcher reports a change, to ride out
    // backend startup races.
    let writer_stop = watcher.stop_handle();
    let writer = tokio::spawn(async move {
        for i in 0..40 {
            if writer_stop.is_stopped() {
                break;
            }
            let _ = std::fs::write(&target, format!("tick {i}\n"));
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
    });

    let ran = tokio::time::timeout(Duration::from_secs(15), watcher.run(&NotifySource)).await;
    writer.abort();
    ran
}

#[tokio::test]
async fn file_creation_under_a_watched_directory_dispatches() -> TestResult {
    let dir = tempfile::tempdir()?;
    let spec = WatchSpec::new(vec![dir.path().to_path_buf()], GlobRule::default())?;
    let (watcher, count) = stop_on_first_change(spec);

    run_with_writer(&watcher, dir.path().join("created.txt")).await?;

    assert!(count.load(Ordering::SeqCst) >= 1);
    Ok(())
}

#[tokio::test]
async fn extension_filter_reports_matching_files() -> TestResult {
    let dir = tempfile::tempdir()?;
    let rule = GlobRule {
        glob: None,
        extension: Some("txt".into()),
    };
    let spec = WatchSpec::new(vec![dir.path().to_path_buf()], rule)?;
    let (watcher, count) = stop_on_first_change(spec);

    run_with_writer(&watcher, dir.path().join("note.txt")).await?;

    assert!(count.load(Ordering::SeqCst) >= 1);
    Ok(())
}
