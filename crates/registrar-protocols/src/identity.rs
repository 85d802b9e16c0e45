//! Identity keys for listener handles.
//!
//! Registration is keyed by object identity, never by structural equality.
//! A listener's identity is the address of its shared allocation, which stays
//! reserved for as long as any `Arc` or `Weak` to it exists.

use std::fmt;
use std::sync::{Arc, Weak};

/// Address-derived identity of a listener allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(usize);

impl ListenerId {
    /// Identity of a strong handle.
    pub fn of<L: ?Sized>(listener: &Arc<L>) -> Self {
        Self(Arc::as_ptr(listener).cast::<()>() as usize)
    }

    /// Identity of a weak handle. Matches [`ListenerId::of`] for the same allocation.
    pub fn of_weak<L: ?Sized>(listener: &Weak<L>) -> Self {
        Self(Weak::as_ptr(listener).cast::<()>() as usize)
    }

    /// Raw address value.
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Returns true if both handles point at the same allocation.
///
/// Compares addresses only, so two `Arc<dyn Trait>` built from the same
/// allocation through different vtables still count as one listener.
pub fn same_listener<L: ?Sized>(a: &Arc<L>, b: &Arc<L>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
