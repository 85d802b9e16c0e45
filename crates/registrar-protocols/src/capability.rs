//! Capability markers.
//!
//! Marker traits declare which guarantees a registrar upholds. They carry no
//! behavior; dispatch code may bound on them, e.g. `R: Registrar<L> + Ordered`
//! to require registration-order notification at compile time.

use serde::{Deserialize, Serialize};

/// Safe to register, deregister and iterate from multiple threads.
pub trait ThreadSafe: Send + Sync {}

/// Traversal yields listeners in first-registration order. A listener that is
/// removed and re-added moves to the end.
pub trait Ordered {}

/// Traversal yields every listener exactly once, in no particular order. The
/// order may differ between two traversals of an unchanged set.
pub trait Unordered {}

/// Every mutation rebuilds and swaps an immutable sequence. Iteration is cheap,
/// mutation costs an allocation.
pub trait CopyOnWrite {}

/// Mutations take a lock and serialize against each other.
pub trait Locking {}

/// Registration does not keep the listener alive; expired listeners are
/// skipped and reclaimed.
pub trait WeakReferencing {}

/// Runtime description of the markers a strategy implements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub thread_safe: bool,
    pub ordered: bool,
    pub copy_on_write: bool,
    pub locking: bool,
    pub weak: bool,
}
