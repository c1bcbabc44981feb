// src/watch/events.rs

use std::path::PathBuf;

use notify::event::{ModifyKind, RenameMode};

/// Kind of filesystem change the watch loop distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Updated,
    Created,
    Deleted,
}

impl ChangeKind {
    /// Created and Deleted change the shape of the watchable tree, so the
    /// subscriptions of the current monitoring attempt go stale and must be
    /// rebuilt before the next event.
    pub fn invalidates_session(self) -> bool {
        matches!(self, ChangeKind::Created | ChangeKind::Deleted)
    }

    /// Map a raw `notify` event kind onto the three kinds above.
    ///
    /// Access and metadata-only events carry no content change and are
    /// dropped. Renames count as delete (old name) / create (new name).
    pub fn from_notify(kind: notify::EventKind) -> Option<Self> {
        match kind {
            notify::EventKind::Create(_) => Some(Self::Created),
            notify::EventKind::Remove(_) => Some(Self::Deleted),
            notify::EventKind::Modify(ModifyKind::Name(RenameMode::From)) => Some(Self::Deleted),
            notify::EventKind::Modify(ModifyKind::Name(_)) => Some(Self::Created),
            notify::EventKind::Modify(ModifyKind::Metadata(_)) => None,
            notify::EventKind::Modify(_) => Some(Self::Updated),
            notify::EventKind::Access(_) => None,
            _ => None,
        }
    }
}

/// A single detected change.
///
/// Only `kind` drives control flow; the path is kept for logging.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub path: PathBuf,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}
