//! Weak-reference registrar.
//!
//! Holds listeners through [`Weak`] so registration never keeps a listener
//! alive. Entries whose listener has been dropped are "expired": traversal
//! skips them and they are excised from the current sequence during
//! reclamation.
//!
//! Expiration is reported through an [`ExpiryQueue`]. Producers are the
//! registrar's own scans in `add`/`remove`, every snapshot that skips an
//! expired entry, and any external owner holding [`WeakRegistrar::expiry_queue`].
//! Reclamation drains the queue and swaps in a sequence without the reported
//! entries; like every other mutation it only replaces the current sequence,
//! so a traversal in progress is unaffected.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::{Arc, Weak};

use tracing::{debug, trace};

use registrar_protocols::{
    CopyOnWrite, ExpiryQueue, ListenerId, Observable, Operation, Ordered, Registrar,
    RegistrarError, Snapshot, Strategy, WeakReferencing, require, same_listener,
};

/// Single-owner, ordered, copy-on-write registrar holding listeners weakly.
pub struct WeakRegistrar<L: ?Sized> {
    current: RefCell<Arc<Vec<Weak<L>>>>,
    expired: RefCell<ExpiryQueue>,
}

impl<L: ?Sized> WeakRegistrar<L> {
    pub fn new() -> Self {
        Self {
            current: RefCell::new(Arc::new(Vec::new())),
            expired: RefCell::new(ExpiryQueue::new()),
        }
    }

    /// Handle to the expiration channel currently drained by this registrar.
    ///
    /// `clear` replaces the channel; handles obtained before a clear feed a
    /// queue that is never drained again.
    pub fn expiry_queue(&self) -> ExpiryQueue {
        self.expired.borrow().clone()
    }

    /// Explicit reclamation pass.
    ///
    /// Reports every expired entry of the current sequence, then drains the
    /// expiration channel. Returns the number of entries removed.
    pub fn reclaim(&self) -> usize {
        let queue = self.expiry_queue();
        for entry in self.load().iter() {
            if entry.strong_count() == 0 {
                queue.notify(ListenerId::of_weak(entry));
            }
        }
        self.process_expired()
    }

    /// Number of entries in the current sequence, expired ones included.
    pub fn entry_count(&self) -> usize {
        self.current.borrow().len()
    }

    fn load(&self) -> Arc<Vec<Weak<L>>> {
        self.current.borrow().clone()
    }

    fn publish(&self, next: Vec<Weak<L>>) {
        *self.current.borrow_mut() = Arc::new(next);
    }

    /// Drain the expiration channel and drop the reported entries.
    ///
    /// An entry is only dropped if it was reported *and* is still expired, so
    /// a stale report for an address since reused by a live listener is
    /// ignored.
    fn process_expired(&self) -> usize {
        let reported: HashSet<ListenerId> = self.expiry_queue().drain().into_iter().collect();
        if reported.is_empty() {
            return 0;
        }

        let current = self.load();
        let next: Vec<Weak<L>> = current
            .iter()
            .filter(|entry| {
                !(entry.strong_count() == 0 && reported.contains(&ListenerId::of_weak(*entry)))
            })
            .cloned()
            .collect();

        let removed = current.len() - next.len();
        if removed > 0 {
            debug!("Reclaimed {} expired listener entries", removed);
            self.publish(next);
        }
        removed
    }
}

impl<L: ?Sized> Observable<L> for WeakRegistrar<L> {
    fn add(&self, listener: Option<Arc<L>>) -> Result<(), RegistrarError> {
        let listener = require(listener, Operation::Add)?;
        let queue = self.expiry_queue();
        let current = self.load();

        for entry in current.iter() {
            match entry.upgrade() {
                Some(live) if same_listener(&live, &listener) => return Ok(()),
                Some(_) => {}
                None => {
                    queue.notify(ListenerId::of_weak(entry));
                }
            }
        }

        trace!("Adding weak listener {}", ListenerId::of(&listener));
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(Arc::downgrade(&listener));
        self.publish(next);
        self.process_expired();
        Ok(())
    }

    fn remove(&self, listener: Option<&Arc<L>>) -> Result<(), RegistrarError> {
        let listener = require(listener, Operation::Remove)?;
        let queue = self.expiry_queue();
        let current = self.load();

        let mut found = None;
        for (index, entry) in current.iter().enumerate() {
            match entry.upgrade() {
                Some(live) if same_listener(&live, listener) => {
                    found = Some(index);
                    break;
                }
                Some(_) => {}
                None => {
                    queue.notify(ListenerId::of_weak(entry));
                }
            }
        }

        if let Some(index) = found {
            trace!("Removing weak listener {}", ListenerId::of(listener));
            let mut next = current.as_ref().clone();
            next.remove(index);
            self.publish(next);
        }
        self.process_expired();
        Ok(())
    }
}

impl<L: ?Sized> Registrar<L> for WeakRegistrar<L> {
    fn clear(&self) {
        trace!("Clearing weak listeners");
        self.publish(Vec::new());
        *self.expired.borrow_mut() = ExpiryQueue::new();
    }

    fn snapshot(&self) -> Snapshot<L> {
        Snapshot::weak(self.load(), self.expiry_queue())
    }

    /// Counts only entries whose listener is still alive.
    fn len(&self) -> usize {
        self.current
            .borrow()
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    /// Upgrades against an owned copy of the sequence so that no borrow is held
    /// while the upgraded handles drop.
    fn contains(&self, listener: &Arc<L>) -> bool {
        self.load().iter().any(|entry| {
            entry
                .upgrade()
                .is_some_and(|live| same_listener(&live, listener))
        })
    }

    fn strategy(&self) -> Strategy {
        Strategy::Weak
    }
}

impl<L: ?Sized> Default for WeakRegistrar<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> Ordered for WeakRegistrar<L> {}
impl<L: ?Sized> CopyOnWrite for WeakRegistrar<L> {}
impl<L: ?Sized> WeakReferencing for WeakRegistrar<L> {}

impl<L: ?Sized> IntoIterator for &WeakRegistrar<L> {
    type Item = Arc<L>;
    type IntoIter = Snapshot<L>;

    fn into_iter(self) -> Snapshot<L> {
        self.snapshot()
    }
}

#[cfg(test)]
#[path = "weak_tests.rs"]
mod tests;
