//! The registration contract.
//!
//! # Contract
//!
//! Every registrar, whatever its strategy, upholds the following:
//!
//! - **Identity keying**: listeners are compared by allocation identity
//!   ([`crate::ListenerId`]), never by value. Two equal but distinct allocations are
//!   two registrations.
//! - **Add idempotence**: adding a present listener changes neither the set
//!   nor its position.
//! - **Remove infallibility**: removing an absent listener is a silent no-op.
//!   Removal never fails because of concurrent mutation or because a traversal
//!   is in progress.
//! - **Reachability**: registration never keeps a listener alive beyond what
//!   the strategy documents. Only [`crate::WeakReferencing`] registrars drop
//!   their hold entirely; all others keep it until removed or cleared.
//! - **Dispatch atomicity**: a [`Snapshot`] yields exactly the listeners
//!   registered when it was taken, each once, regardless of `add`, `remove` or
//!   `clear` calls made during traversal, including calls from the consumer.
//!   A listener removed mid-traversal may therefore receive one more
//!   notification.
//! - **Ordering**: [`crate::Ordered`] registrars yield first-registration
//!   order; [`crate::Unordered`] registrars only guarantee completeness.
//!
//! The only error is passing an empty handle (`None`) to `add` or `remove`.

use std::sync::Arc;

use crate::error::{Operation, RegistrarError};
use crate::snapshot::Snapshot;
use crate::strategy::Strategy;

/// Registration surface of an observable object.
///
/// Observables expose this to their listeners and keep traversal to
/// themselves. Code that only subscribes or unsubscribes can bound on
/// `Observable<L>` instead of the full [`Registrar`].
pub trait Observable<L: ?Sized> {
    /// Register `listener`. A no-op if it is already registered.
    fn add(&self, listener: Option<Arc<L>>) -> Result<(), RegistrarError>;

    /// Deregister `listener`. A no-op if it is not registered.
    fn remove(&self, listener: Option<&Arc<L>>) -> Result<(), RegistrarError>;
}

/// Add/remove/clear/traverse over listener handles.
pub trait Registrar<L: ?Sized>: Observable<L> {
    /// Deregister every listener.
    fn clear(&self);

    /// Capture the current registration set for traversal.
    fn snapshot(&self) -> Snapshot<L>;

    /// Number of registered listeners that can still be notified.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `listener` is currently registered.
    fn contains(&self, listener: &Arc<L>) -> bool;

    /// The strategy backing this registrar.
    fn strategy(&self) -> Strategy;
}

/// Unwrap a handle passed to `operation`, rejecting the empty handle.
pub fn require<T>(listener: Option<T>, operation: Operation) -> Result<T, RegistrarError> {
    match listener {
        Some(listener) => Ok(listener),
        None => {
            tracing::warn!("Rejected empty listener handle in {}", operation);
            Err(RegistrarError::InvalidArgument { operation })
        }
    }
}
