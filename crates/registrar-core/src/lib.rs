//! # Registrar Core
//!
//! Listener registrar implementations.
//!
//! ## Components
//!
//! - [`SingleThreadedRegistrar`] - Single-owner, ordered, copy-on-write
//! - [`ThreadSafeRegistrar`] - Thread-safe, ordered, copy-on-write, serialized writers
//! - [`UnorderedRegistrar`] - Thread-safe, unordered, sharded identity map
//! - [`WeakRegistrar`] - Single-owner, ordered, copy-on-write, weakly held listeners
//!
//! ## Choosing a Strategy
//!
//! A strategy is picked once per observable object, at construction. Use
//! [`build`] to construct from a [`Strategy`] value chosen at runtime, or
//! [`build_shared`] when the registrar must be shared across threads.

pub mod factory;
pub mod registry;

pub use factory::{build, build_shared};
pub use registry::{
    SingleThreadedRegistrar, ThreadSafeRegistrar, UnorderedRegistrar, WeakRegistrar,
};

pub use registrar_protocols::{Observable, Registrar, RegistrarError, Snapshot, Strategy};
