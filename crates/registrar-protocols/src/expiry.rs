//! Expiration notification channel for weak registrations.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::identity::ListenerId;

/// Queue of identities whose weak entries were observed expired.
///
/// Producers (registrar scans, snapshot traversal, or an owning object that
/// knows a listener just died) push ids; the owning registrar drains the
/// queue during reclamation. An id is pending at most once, so repeated
/// traversals over the same expired entry never grow the queue. Cloning
/// yields another handle to the same queue.
#[derive(Debug, Clone, Default)]
pub struct ExpiryQueue {
    inner: Arc<Mutex<HashSet<ListenerId>>>,
}

impl ExpiryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report that the entry for `id` has expired. Returns false if `id` was
    /// already pending.
    pub fn notify(&self, id: ListenerId) -> bool {
        self.inner.lock().insert(id)
    }

    /// Take every pending notification, in no particular order.
    pub fn drain(&self) -> Vec<ListenerId> {
        std::mem::take(&mut *self.inner.lock()).into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Whether both handles feed the same queue.
    pub fn same_queue(&self, other: &ExpiryQueue) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_and_drain() {
        let queue = ExpiryQueue::new();
        let a = Arc::new(1u8);
        let b = Arc::new(2u8);

        queue.notify(ListenerId::of(&a));
        queue.notify(ListenerId::of(&b));
        assert_eq!(queue.len(), 2);

        let drained: HashSet<ListenerId> = queue.drain().into_iter().collect();
        assert_eq!(drained.len(), 2);
        assert!(drained.contains(&ListenerId::of(&a)));
        assert!(drained.contains(&ListenerId::of(&b)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_repeated_notify_is_pending_once() {
        let queue = ExpiryQueue::new();
        let a = Arc::new(1u8);
        let id = ListenerId::of(&a);

        assert!(queue.notify(id));
        for _ in 0..100 {
            assert!(!queue.notify(id));
        }
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain(), vec![id]);

        // Pending again once drained
        assert!(queue.notify(id));
    }

    #[test]
    fn test_clones_share_queue() {
        let queue = ExpiryQueue::new();
        let handle = queue.clone();
        let a = Arc::new(());

        handle.notify(ListenerId::of(&a));
        assert_eq!(queue.len(), 1);
        assert!(queue.same_queue(&handle));
        assert!(!queue.same_queue(&ExpiryQueue::new()));
    }
}
