//! Registrar strategies and construction-time selection.
//!
//! A caller picks exactly one strategy per observable object. Strategies are
//! swapped at construction, never composed at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capability::Capabilities;
use crate::error::StrategyError;

/// The four interchangeable registrar implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Single-owner, ordered, copy-on-write.
    Ordered,
    /// Thread-safe, ordered, copy-on-write with serialized writers.
    ThreadSafe,
    /// Thread-safe, unordered, no writer serialization.
    Unordered,
    /// Single-owner, ordered, copy-on-write, holds listeners weakly.
    Weak,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Ordered,
        Strategy::ThreadSafe,
        Strategy::Unordered,
        Strategy::Weak,
    ];

    /// Guarantees this strategy upholds.
    pub fn capabilities(self) -> Capabilities {
        match self {
            Strategy::Ordered => Capabilities {
                thread_safe: false,
                ordered: true,
                copy_on_write: true,
                locking: false,
                weak: false,
            },
            Strategy::ThreadSafe => Capabilities {
                thread_safe: true,
                ordered: true,
                copy_on_write: true,
                locking: true,
                weak: false,
            },
            Strategy::Unordered => Capabilities {
                thread_safe: true,
                ordered: false,
                copy_on_write: false,
                locking: false,
                weak: false,
            },
            Strategy::Weak => Capabilities {
                thread_safe: false,
                ordered: true,
                copy_on_write: true,
                locking: false,
                weak: true,
            },
        }
    }

    /// Whether this strategy satisfies every requirement set in `requirements`.
    pub fn satisfies(self, requirements: Requirements) -> bool {
        let caps = self.capabilities();
        (!requirements.thread_safe || caps.thread_safe)
            && (!requirements.ordered || caps.ordered)
            && (!requirements.weak || caps.weak)
    }

    /// Pick the cheapest strategy meeting `requirements`.
    ///
    /// Single-owner access gets the lock-free [`Strategy::Ordered`] variant,
    /// thread-safe access without ordering gets [`Strategy::Unordered`] so
    /// writers never serialize. Weak holding is only offered single-owner.
    pub fn select(requirements: Requirements) -> Result<Strategy, StrategyError> {
        let strategy = match requirements {
            Requirements {
                thread_safe: true,
                weak: true,
                ..
            } => return Err(StrategyError::Unsatisfiable(requirements)),
            Requirements { weak: true, .. } => Strategy::Weak,
            Requirements {
                thread_safe: true,
                ordered: true,
                ..
            } => Strategy::ThreadSafe,
            Requirements {
                thread_safe: true,
                ..
            } => Strategy::Unordered,
            _ => Strategy::Ordered,
        };
        debug_assert!(strategy.satisfies(requirements));
        Ok(strategy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Ordered => "ordered",
            Strategy::ThreadSafe => "thread_safe",
            Strategy::Unordered => "unordered",
            Strategy::Weak => "weak",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an observable needs from its registrar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirements {
    /// Registration and iteration happen from more than one thread.
    #[serde(default)]
    pub thread_safe: bool,

    /// Listeners must be notified in registration order.
    #[serde(default)]
    pub ordered: bool,

    /// Registration must not keep listeners alive.
    #[serde(default)]
    pub weak: bool,
}

impl fmt::Display for Requirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<&str> = [
            (self.thread_safe, "thread_safe"),
            (self.ordered, "ordered"),
            (self.weak, "weak"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();
        write!(f, "requirements [{}]", flags.join(", "))
    }
}
