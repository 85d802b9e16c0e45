//! Single-owner ordered registrar.

use std::cell::RefCell;
use std::sync::Arc;

use tracing::trace;

use registrar_protocols::{
    CopyOnWrite, ListenerId, Observable, Operation, Ordered, Registrar, RegistrarError, Snapshot,
    Strategy, require, same_listener,
};

/// Registrar for objects used from one thread at a time, optimized for
/// iteration.
///
/// Every mutation builds a new sequence and swaps it in; a snapshot keeps the
/// sequence it was taken from, so mutation during traversal is never visible
/// to that traversal. The registrar is `!Sync`: sharing it across threads is a
/// compile error rather than undefined behavior.
pub struct SingleThreadedRegistrar<L: ?Sized> {
    current: RefCell<Arc<Vec<Arc<L>>>>,
}

impl<L: ?Sized> SingleThreadedRegistrar<L> {
    pub fn new() -> Self {
        Self {
            current: RefCell::new(Arc::new(Vec::new())),
        }
    }

    fn load(&self) -> Arc<Vec<Arc<L>>> {
        self.current.borrow().clone()
    }

    fn publish(&self, next: Vec<Arc<L>>) {
        *self.current.borrow_mut() = Arc::new(next);
    }
}

impl<L: ?Sized> Observable<L> for SingleThreadedRegistrar<L> {
    fn add(&self, listener: Option<Arc<L>>) -> Result<(), RegistrarError> {
        let listener = require(listener, Operation::Add)?;
        let current = self.load();
        if current.iter().any(|l| same_listener(l, &listener)) {
            return Ok(());
        }

        trace!("Adding listener {}", ListenerId::of(&listener));
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(listener);
        self.publish(next);
        Ok(())
    }

    fn remove(&self, listener: Option<&Arc<L>>) -> Result<(), RegistrarError> {
        let listener = require(listener, Operation::Remove)?;
        let current = self.load();
        let Some(index) = current.iter().position(|l| same_listener(l, listener)) else {
            return Ok(());
        };

        trace!("Removing listener {}", ListenerId::of(listener));
        let mut next = current.as_ref().clone();
        next.remove(index);
        self.publish(next);
        Ok(())
    }
}

impl<L: ?Sized> Registrar<L> for SingleThreadedRegistrar<L> {
    fn clear(&self) {
        trace!("Clearing listeners");
        self.publish(Vec::new());
    }

    fn snapshot(&self) -> Snapshot<L> {
        Snapshot::strong(self.load())
    }

    fn len(&self) -> usize {
        self.current.borrow().len()
    }

    fn contains(&self, listener: &Arc<L>) -> bool {
        self.current
            .borrow()
            .iter()
            .any(|l| same_listener(l, listener))
    }

    fn strategy(&self) -> Strategy {
        Strategy::Ordered
    }
}

impl<L: ?Sized> Default for SingleThreadedRegistrar<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> Ordered for SingleThreadedRegistrar<L> {}
impl<L: ?Sized> CopyOnWrite for SingleThreadedRegistrar<L> {}

impl<L: ?Sized> IntoIterator for &SingleThreadedRegistrar<L> {
    type Item = Arc<L>;
    type IntoIter = Snapshot<L>;

    fn into_iter(self) -> Snapshot<L> {
        self.snapshot()
    }
}
