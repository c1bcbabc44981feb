// src/watch/mod.rs

//! Change detection: the retry/rebuild monitoring loop and its collaborators.
//!
//! This module is responsible for:
//! - Resolving the directory list and glob/extension filter into a
//!   [`WatchSpec`].
//! - Wiring up the cross-platform filesystem backend (`notify`) behind the
//!   [`EventSource`] seam.
//! - Running monitoring attempts until stopped, rebuilding subscriptions
//!   whenever a Created/Deleted event changes the shape of the watched tree.
//!
//! It does **not** know how changes are reported to the user; callers attach
//! zero-argument listeners via [`Watcher::on_change`].

pub mod events;
pub mod source;
pub mod spec;
pub mod watcher;

pub use events::{ChangeEvent, ChangeKind};
pub use source::{EventSource, NotifySession, NotifySource, WatchSession};
pub use spec::{DEFAULT_GLOB, GlobRule, WatchSpec};
pub use watcher::{StopHandle, Watcher};
