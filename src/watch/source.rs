// src/watch/source.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher as _};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::watch::events::{ChangeEvent, ChangeKind};
use crate::watch::spec::WatchSpec;

/// Something that can turn a [`WatchSpec`] into live subscriptions.
///
/// The watch loop only ever talks to this trait, so the retry/rebuild logic
/// can be driven by a scripted source in tests while production uses
/// [`NotifySource`].
pub trait EventSource {
    type Session: WatchSession;

    /// Build fresh subscriptions for one monitoring attempt.
    fn subscribe(&self, spec: &WatchSpec) -> Result<Self::Session>;
}

/// Live subscriptions for a single monitoring attempt.
///
/// Dropping a session must release every underlying watch handle, no matter
/// how the attempt ended.
#[allow(async_fn_in_trait)]
pub trait WatchSession {
    /// Wait for the next qualifying change.
    ///
    /// `Ok(None)` means the source is exhausted; `Err` means the attempt
    /// failed and should be retried with a fresh session.
    async fn next_event(&mut self) -> Result<Option<ChangeEvent>>;
}

/// Event source backed by the cross-platform `notify` watcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifySource;

impl EventSource for NotifySource {
    type Session = NotifySession;

    fn subscribe(&self, spec: &WatchSpec) -> Result<NotifySession> {
        // Channel from the blocking notify callback into the async world.
        let (event_tx, event_rx) = mpsc::unbounded_channel::<notify::Result<notify::Event>>();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<notify::Event>| {
                // A closed channel just means the session was dropped.
                let _ = event_tx.send(res);
            },
            Config::default(),
        )?;

        let mut roots = Vec::with_capacity(spec.directories().len());
        for dir in spec.directories() {
            // Canonicalize once so event paths relativize cleanly.
            let root = dir.canonicalize().unwrap_or_else(|_| dir.clone());
            watcher
                .watch(&root, RecursiveMode::Recursive)
                .with_context(|| format!("watching {}", root.display()))?;
            roots.push(root);
        }

        debug!(dirs = roots.len(), glob = spec.glob(), "subscriptions built");

        Ok(NotifySession {
            spec: spec.clone(),
            roots,
            event_rx,
            _watcher: watcher,
        })
    }
}

/// One monitoring attempt's live `notify` subscriptions.
///
/// The underlying `RecommendedWatcher` is owned by the session; dropping the
/// session releases all of its OS watch handles.
pub struct NotifySession {
    spec: WatchSpec,
    roots: Vec<PathBuf>,
    event_rx: mpsc::UnboundedReceiver<notify::Result<notify::Event>>,
    _watcher: RecommendedWatcher,
}

impl std::fmt::Debug for NotifySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifySession")
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

impl WatchSession for NotifySession {
    async fn next_event(&mut self) -> Result<Option<ChangeEvent>> {
        loop {
            match self.event_rx.recv().await {
                Some(Ok(event)) => {
                    if let Some(change) = self.translate(event) {
                        return Ok(Some(change));
                    }
                    // Non-qualifying event; keep waiting.
                }
                Some(Err(err)) => {
                    return Err(err).context("filesystem event stream failed");
                }
                None => return Ok(None),
            }
        }
    }
}

impl NotifySession {
    /// Turn a raw notify event into a [`ChangeEvent`], or `None` if neither
    /// the kind nor any of its paths qualify under the spec's glob.
    fn translate(&self, event: notify::Event) -> Option<ChangeEvent> {
        let kind = ChangeKind::from_notify(event.kind)?;

        let path = event.paths.into_iter().find(|path| self.matches(path));
        match path {
            Some(path) => Some(ChangeEvent::new(kind, path)),
            None => {
                trace!(?kind, "event did not match glob, skipping");
                None
            }
        }
    }

    fn matches(&self, path: &Path) -> bool {
        self.roots
            .iter()
            .any(|root| relative_str(root, path).is_some_and(|rel| self.spec.is_match(&rel)))
    }
}

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// Returns `None` if the path is not under `root`.
fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(rel.to_string_lossy().replace('\\', "/"))
}
