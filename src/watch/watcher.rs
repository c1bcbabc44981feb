// src/watch/watcher.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;
use tracing::{debug, info};

use crate::watch::events::ChangeEvent;
use crate::watch::source::{EventSource, WatchSession};
use crate::watch::spec::WatchSpec;

type Listener = Box<dyn Fn() + Send + Sync>;

/// Cloneable stop control for a [`Watcher`].
///
/// The flag is set-once and monotonic; `stop` is idempotent and safe to call
/// from a signal-handling task while a monitoring attempt is in flight.
/// Setting it wakes an attempt blocked on event delivery.
#[derive(Clone, Default)]
pub struct StopHandle {
    inner: Arc<StopFlag>,
}

#[derive(Default)]
struct StopFlag {
    stopped: AtomicBool,
    wake: Notify,
}

impl StopHandle {
    /// Request a graceful stop. First caller wins; later calls are no-ops.
    pub fn stop(&self) {
        if !self.inner.stopped.swap(true, Ordering::SeqCst) {
            self.inner.wake.notify_waiters();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.inner.stopped.load(Ordering::SeqCst)
    }

    /// Resolve once the flag is set.
    ///
    /// The waiter is registered before the flag is re-checked, so a `stop`
    /// that lands in between cannot be missed.
    pub(crate) async fn wait(&self) {
        loop {
            let notified = self.inner.wake.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.is_stopped() {
                return;
            }
            notified.await;
        }
    }
}

/// How one monitoring attempt ended.
enum AttemptEnd {
    /// Stop was requested; the outer loop must exit.
    Stopped,
    /// A Created/Deleted event invalidated the subscriptions.
    Rebuild,
    /// The event source ran dry.
    Exhausted,
    /// The attempt failed; transient, retried with a fresh session.
    Failed(anyhow::Error),
}

/// Coordinates repeated monitoring attempts until stopped.
///
/// Owns the [`WatchSpec`] and the listener registry. Each attempt builds a
/// fresh session through the [`EventSource`]; a Created or Deleted event ends
/// the attempt so the next one picks up the changed tree, and any failure is
/// swallowed and retried immediately. Only the stop flag ends the loop.
pub struct Watcher {
    spec: WatchSpec,
    listeners: Vec<Listener>,
    stop: StopHandle,
}

impl Watcher {
    pub fn new(spec: WatchSpec) -> Self {
        Self {
            spec,
            listeners: Vec::new(),
            stop: StopHandle::default(),
        }
    }

    pub fn spec(&self) -> &WatchSpec {
        &self.spec
    }

    /// Register a listener invoked once per detected change, in registration
    /// order. All listeners must be registered before [`Watcher::run`].
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Handle for requesting a stop, e.g. from a Ctrl-C task.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run monitoring attempts until stopped.
    ///
    /// Subscription and event-stream failures are logged and retried
    /// immediately with a fresh session; they never propagate. Returns once
    /// the stop flag is set, including when it was set before the call.
    pub async fn run<S: EventSource>(&self, source: &S) {
        while !self.stop.is_stopped() {
            let session = match source.subscribe(&self.spec) {
                Ok(session) => session,
                Err(err) => {
                    debug!("failed to build subscriptions, retrying: {err:#}");
                    continue;
                }
            };

            match self.attempt(session).await {
                AttemptEnd::Stopped => break,
                AttemptEnd::Rebuild => {
                    debug!("watched tree changed shape, rebuilding subscriptions");
                }
                AttemptEnd::Exhausted => {
                    debug!("event source exhausted, rebuilding subscriptions");
                }
                AttemptEnd::Failed(err) => {
                    debug!("monitoring attempt failed, retrying: {err:#}");
                }
            }
        }

        info!("watcher stopped");
    }

    /// One monitoring attempt: stream events from `session` until it is
    /// invalidated, fails, or a stop is requested. The session is dropped on
    /// return, releasing its watch handles.
    async fn attempt<S: WatchSession>(&self, mut session: S) -> AttemptEnd {
        loop {
            tokio::select! {
                biased;
                _ = self.stop.wait() => return AttemptEnd::Stopped,
                next = session.next_event() => match next {
                    Ok(Some(event)) => {
                        self.dispatch(&event);
                        if event.kind.invalidates_session() {
                            return AttemptEnd::Rebuild;
                        }
                    }
                    Ok(None) => return AttemptEnd::Exhausted,
                    Err(err) => return AttemptEnd::Failed(err),
                },
            }
        }
    }

    /// Invoke every listener exactly once, synchronously, in registration
    /// order. No batching, no debouncing.
    fn dispatch(&self, event: &ChangeEvent) {
        debug!(kind = ?event.kind, path = %event.path.display(), "change detected");
        for listener in &self.listeners {
            listener();
        }
    }
}
