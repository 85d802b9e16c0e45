//! Point-in-time traversal over a registration set.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::{Arc, Weak};

use crate::expiry::ExpiryQueue;
use crate::identity::ListenerId;

/// Immutable view of the registration set captured when traversal begins.
///
/// A snapshot owns its backing sequence and never borrows the registrar that
/// produced it, so the consumer may add, remove or clear listeners on that
/// registrar mid-traversal without affecting what the snapshot yields. It is
/// single-pass: once exhausted it stays exhausted, and it cannot be cloned to
/// restart.
pub struct Snapshot<L: ?Sized> {
    source: Source<L>,
    cursor: usize,
}

enum Source<L: ?Sized> {
    Strong(Arc<Vec<Arc<L>>>),
    Weak {
        entries: Arc<Vec<Weak<L>>>,
        expired: ExpiryQueue,
    },
}

impl<L: ?Sized> Snapshot<L> {
    /// Traverse a sequence of strong handles.
    pub fn strong(entries: Arc<Vec<Arc<L>>>) -> Self {
        Self {
            source: Source::Strong(entries),
            cursor: 0,
        }
    }

    /// Traverse a sequence of weak entries, skipping those that no longer
    /// resolve and reporting them to `expired`.
    pub fn weak(entries: Arc<Vec<Weak<L>>>, expired: ExpiryQueue) -> Self {
        Self {
            source: Source::Weak { entries, expired },
            cursor: 0,
        }
    }

    /// An empty traversal.
    pub fn empty() -> Self {
        Self::strong(Arc::new(Vec::new()))
    }

    fn total(&self) -> usize {
        match &self.source {
            Source::Strong(entries) => entries.len(),
            Source::Weak { entries, .. } => entries.len(),
        }
    }
}

impl<L: ?Sized> Iterator for Snapshot<L> {
    type Item = Arc<L>;

    fn next(&mut self) -> Option<Arc<L>> {
        match &self.source {
            Source::Strong(entries) => {
                let next = entries.get(self.cursor)?.clone();
                self.cursor += 1;
                Some(next)
            }
            Source::Weak { entries, expired } => {
                while let Some(entry) = entries.get(self.cursor) {
                    self.cursor += 1;
                    match entry.upgrade() {
                        Some(listener) => return Some(listener),
                        None => {
                            expired.notify(ListenerId::of_weak(entry));
                        }
                    }
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.cursor);
        match self.source {
            Source::Strong(_) => (remaining, Some(remaining)),
            Source::Weak { .. } => (0, Some(remaining)),
        }
    }
}

impl<L: ?Sized> FusedIterator for Snapshot<L> {}

impl<L: ?Sized> fmt::Debug for Snapshot<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.source {
            Source::Strong(_) => "strong",
            Source::Weak { .. } => "weak",
        };
        f.debug_struct("Snapshot")
            .field("kind", &kind)
            .field("cursor", &self.cursor)
            .field("len", &self.total())
            .finish()
    }
}
