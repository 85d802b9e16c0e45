//! Registrar strategies.

mod ordered;
mod thread_safe;
mod unordered;
mod weak;

pub use ordered::SingleThreadedRegistrar;
pub use thread_safe::ThreadSafeRegistrar;
pub use unordered::UnorderedRegistrar;
pub use weak::WeakRegistrar;
