//! # Registrar Protocols
//!
//! Protocol definitions for listener registrars.
//! Contains only the contract and its shared types - no registrar implementations.
//!
//! ## Core Types
//!
//! - [`Observable`] - The add/remove registration surface
//! - [`Registrar`] - The full add/remove/clear/snapshot contract
//! - [`Snapshot`] - Point-in-time traversal of registered listeners
//! - [`ListenerId`] - Identity key for listener handles
//! - [`ExpiryQueue`] - Expiration channel for weakly held listeners
//! - [`Strategy`] - Construction-time choice of registrar implementation
//! - Capability markers: [`ThreadSafe`], [`Ordered`], [`Unordered`],
//!   [`CopyOnWrite`], [`Locking`], [`WeakReferencing`]

pub mod capability;
pub mod error;
pub mod expiry;
pub mod identity;
pub mod registrar;
pub mod snapshot;
pub mod strategy;

pub use capability::{
    Capabilities, CopyOnWrite, Locking, Ordered, ThreadSafe, Unordered, WeakReferencing,
};
pub use error::{Operation, RegistrarError, StrategyError};
pub use expiry::ExpiryQueue;
pub use identity::{ListenerId, same_listener};
pub use registrar::{Observable, Registrar, require};
pub use snapshot::Snapshot;
pub use strategy::{Requirements, Strategy};
