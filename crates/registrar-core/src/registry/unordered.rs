//! Unordered thread-safe registrar.
//!
//! Drops the ordering guarantee so (de)registration never serializes on a
//! single registrar-wide lock: listeners live in a sharded concurrent map
//! keyed by identity. Writers touching different shards proceed in parallel.
//! A writer can still wait on its shard's lock while another thread holds it,
//! including while a snapshot copies that shard.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::trace;

use registrar_protocols::{
    ListenerId, Observable, Operation, Registrar, RegistrarError, Snapshot, Strategy, ThreadSafe,
    Unordered, require, same_listener,
};

/// Registrar safe to use across threads, without an ordering guarantee.
///
/// This provides:
/// - Thread-safe storage using DashMap, keyed by [`ListenerId`]
/// - Idempotent add, infallible remove
/// - Traversal that yields every listener registered for its whole duration
///   exactly once
///
/// The identity key is only used to pick a shard and bucket; it never orders
/// anything a caller can see. Because the map holds a strong handle, no other
/// allocation can share a registered listener's address, and removal still
/// checks the stored handle's identity before dropping it.
pub struct UnorderedRegistrar<L: ?Sized> {
    listeners: DashMap<ListenerId, Arc<L>>,
}

impl<L: ?Sized> UnorderedRegistrar<L> {
    /// Create a new empty registrar.
    pub fn new() -> Self {
        Self {
            listeners: DashMap::new(),
        }
    }

    /// Create an empty registrar with room for `capacity` listeners.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            listeners: DashMap::with_capacity(capacity),
        }
    }
}

impl<L: ?Sized> Observable<L> for UnorderedRegistrar<L> {
    fn add(&self, listener: Option<Arc<L>>) -> Result<(), RegistrarError> {
        let listener = require(listener, Operation::Add)?;
        let id = ListenerId::of(&listener);

        self.listeners.entry(id).or_insert_with(|| {
            trace!("Adding listener {}", id);
            listener
        });
        Ok(())
    }

    fn remove(&self, listener: Option<&Arc<L>>) -> Result<(), RegistrarError> {
        let listener = require(listener, Operation::Remove)?;
        let id = ListenerId::of(listener);

        if self
            .listeners
            .remove_if(&id, |_, stored| same_listener(stored, listener))
            .is_some()
        {
            trace!("Removed listener {}", id);
        }
        Ok(())
    }
}

impl<L: ?Sized> Registrar<L> for UnorderedRegistrar<L> {
    fn clear(&self) {
        trace!("Clearing listeners");
        self.listeners.clear();
    }

    /// Copies the live set up front, one shard at a time, so no shard lock is
    /// held while the consumer runs. Each shard is read-locked for the duration
    /// of its copy, so a concurrent `add` or `remove` on that shard waits for
    /// it. A listener added or removed while the copy is in progress may or
    /// may not be included.
    fn snapshot(&self) -> Snapshot<L> {
        let entries: Vec<Arc<L>> = self
            .listeners
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        Snapshot::strong(Arc::new(entries))
    }

    fn len(&self) -> usize {
        self.listeners.len()
    }

    fn contains(&self, listener: &Arc<L>) -> bool {
        self.listeners
            .get(&ListenerId::of(listener))
            .is_some_and(|stored| same_listener(stored.value(), listener))
    }

    fn strategy(&self) -> Strategy {
        Strategy::Unordered
    }
}

impl<L: ?Sized> Default for UnorderedRegistrar<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized + Send + Sync> ThreadSafe for UnorderedRegistrar<L> {}
impl<L: ?Sized> Unordered for UnorderedRegistrar<L> {}

impl<L: ?Sized> IntoIterator for &UnorderedRegistrar<L> {
    type Item = Arc<L>;
    type IntoIter = Snapshot<L>;

    fn into_iter(self) -> Snapshot<L> {
        self.snapshot()
    }
}

#[cfg(test)]
#[path = "unordered_tests.rs"]
mod tests;
