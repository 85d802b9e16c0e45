//! # Registrar
//!
//! Interchangeable listener-registration strategies backing an observer
//! contract: listeners register and deregister by identity, and a dispatcher
//! iterates a snapshot of the registered set to deliver notifications.
//!
//! ## Crates
//!
//! - [`protocols`] - The [`Registrar`] contract, [`Snapshot`], capability markers
//! - [`strategies`] - The four strategies and the construction-time factory
//! - [`config`] - TOML configuration selecting a strategy
//!
//! ## Strategies
//!
//! | Strategy | Thread-safe | Ordered | Holds |
//! |---|---|---|---|
//! | [`SingleThreadedRegistrar`] | no | yes | strong |
//! | [`ThreadSafeRegistrar`] | yes (locking writers) | yes | strong |
//! | [`UnorderedRegistrar`] | yes | no | strong |
//! | [`WeakRegistrar`] | no | yes | weak |
//!
//! ```
//! use std::sync::Arc;
//! use registrar::{Observable, Registrar, ThreadSafeRegistrar};
//!
//! let registrar = ThreadSafeRegistrar::new();
//! let listener = Arc::new("listener");
//! registrar.add(Some(listener.clone())).unwrap();
//!
//! for l in &registrar {
//!     // Removing mid-dispatch does not affect this traversal.
//!     registrar.remove(Some(&l)).unwrap();
//! }
//! assert!(registrar.is_empty());
//! ```

use std::path::Path;

pub use registrar_config as config;
pub use registrar_core as strategies;
pub use registrar_protocols as protocols;

pub use registrar_config::{Config, ConfigError, ConfigLoader, ConfigValidator, RegistrarConfig};
pub use registrar_core::{
    SingleThreadedRegistrar, ThreadSafeRegistrar, UnorderedRegistrar, WeakRegistrar, build,
    build_shared,
};
pub use registrar_protocols::{
    Capabilities, CopyOnWrite, ExpiryQueue, ListenerId, Locking, Observable, Operation, Ordered,
    Registrar, RegistrarError, Requirements, Snapshot, Strategy, StrategyError, ThreadSafe,
    Unordered, WeakReferencing,
};

/// Validate `config` and construct the registrar it selects.
pub fn build_from_config<L>(config: &Config) -> Result<Box<dyn Registrar<L>>, ConfigError>
where
    L: ?Sized + 'static,
{
    let strategy = ConfigValidator::resolve(config)?;
    Ok(build(strategy))
}

/// Load a TOML config file and construct the registrar it selects.
pub fn build_from_file<L>(path: &Path) -> Result<Box<dyn Registrar<L>>, ConfigError>
where
    L: ?Sized + 'static,
{
    let config = ConfigLoader::load(path)?;
    build_from_config(&config)
}
