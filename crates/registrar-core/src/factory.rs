//! Construction-time strategy selection.

use std::sync::Arc;

use tracing::debug;

use registrar_protocols::{Registrar, Strategy, StrategyError};

use crate::registry::{
    SingleThreadedRegistrar, ThreadSafeRegistrar, UnorderedRegistrar, WeakRegistrar,
};

/// Construct the registrar implementing `strategy`.
pub fn build<L>(strategy: Strategy) -> Box<dyn Registrar<L>>
where
    L: ?Sized + 'static,
{
    debug!("Building {} registrar", strategy);
    match strategy {
        Strategy::Ordered => Box::new(SingleThreadedRegistrar::new()),
        Strategy::ThreadSafe => Box::new(ThreadSafeRegistrar::new()),
        Strategy::Unordered => Box::new(UnorderedRegistrar::new()),
        Strategy::Weak => Box::new(WeakRegistrar::new()),
    }
}

/// Construct a registrar that can be shared across threads.
///
/// # Errors
///
/// Returns [`StrategyError::NotThreadSafe`] for single-owner strategies.
pub fn build_shared<L>(
    strategy: Strategy,
) -> Result<Arc<dyn Registrar<L> + Send + Sync>, StrategyError>
where
    L: ?Sized + Send + Sync + 'static,
{
    debug!("Building shared {} registrar", strategy);
    match strategy {
        Strategy::ThreadSafe => Ok(Arc::new(ThreadSafeRegistrar::new())),
        Strategy::Unordered => Ok(Arc::new(UnorderedRegistrar::new())),
        Strategy::Ordered | Strategy::Weak => Err(StrategyError::NotThreadSafe(strategy)),
    }
}
