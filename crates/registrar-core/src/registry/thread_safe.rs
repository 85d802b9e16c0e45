//! Thread-safe ordered registrar.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::trace;

use registrar_protocols::{
    CopyOnWrite, ListenerId, Locking, Observable, Operation, Ordered, Registrar, RegistrarError,
    Snapshot, Strategy, ThreadSafe, require, same_listener,
};

/// Registrar safe to use across threads for both (de)registration and
/// iteration, preserving registration order.
///
/// Readers load the current sequence without locking. Writers serialize on a
/// mutex, rebuild the sequence and publish it with a single atomic store, so
/// a traversal never observes a half-applied mutation.
pub struct ThreadSafeRegistrar<L: ?Sized> {
    current: ArcSwap<Vec<Arc<L>>>,
    write_lock: Mutex<()>,
}

impl<L: ?Sized> ThreadSafeRegistrar<L> {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Vec::new()),
            write_lock: Mutex::new(()),
        }
    }
}

impl<L: ?Sized> Observable<L> for ThreadSafeRegistrar<L> {
    fn add(&self, listener: Option<Arc<L>>) -> Result<(), RegistrarError> {
        let listener = require(listener, Operation::Add)?;
        let _guard = self.write_lock.lock();

        let current = self.current.load();
        if current.iter().any(|l| same_listener(l, &listener)) {
            return Ok(());
        }

        trace!("Adding listener {}", ListenerId::of(&listener));
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(listener);
        self.current.store(Arc::new(next));
        Ok(())
    }

    fn remove(&self, listener: Option<&Arc<L>>) -> Result<(), RegistrarError> {
        let listener = require(listener, Operation::Remove)?;
        let _guard = self.write_lock.lock();

        let current = self.current.load();
        let Some(index) = current.iter().position(|l| same_listener(l, listener)) else {
            return Ok(());
        };

        trace!("Removing listener {}", ListenerId::of(listener));
        let mut next: Vec<Arc<L>> = current.iter().cloned().collect();
        next.remove(index);
        self.current.store(Arc::new(next));
        Ok(())
    }
}

impl<L: ?Sized> Registrar<L> for ThreadSafeRegistrar<L> {
    fn clear(&self) {
        let _guard = self.write_lock.lock();
        trace!("Clearing listeners");
        self.current.store(Arc::new(Vec::new()));
    }

    fn snapshot(&self) -> Snapshot<L> {
        Snapshot::strong(self.current.load_full())
    }

    fn len(&self) -> usize {
        self.current.load().len()
    }

    fn contains(&self, listener: &Arc<L>) -> bool {
        self.current
            .load()
            .iter()
            .any(|l| same_listener(l, listener))
    }

    fn strategy(&self) -> Strategy {
        Strategy::ThreadSafe
    }
}

impl<L: ?Sized> Default for ThreadSafeRegistrar<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized + Send + Sync> ThreadSafe for ThreadSafeRegistrar<L> {}
impl<L: ?Sized> Ordered for ThreadSafeRegistrar<L> {}
impl<L: ?Sized> CopyOnWrite for ThreadSafeRegistrar<L> {}
impl<L: ?Sized> Locking for ThreadSafeRegistrar<L> {}

impl<L: ?Sized> IntoIterator for &ThreadSafeRegistrar<L> {
    type Item = Arc<L>;
    type IntoIter = Snapshot<L>;

    fn into_iter(self) -> Snapshot<L> {
        self.snapshot()
    }
}
