//! Configuration schema definitions.

use registrar_protocols::{Requirements, Strategy, StrategyError};
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registrar: RegistrarConfig,
}

/// Registrar configuration.
///
/// Either names a strategy outright or describes what the observable needs
/// and lets [`Strategy::select`] pick the cheapest match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,

    #[serde(default)]
    pub requirements: Requirements,
}

impl RegistrarConfig {
    /// The explicit strategy if set, otherwise the one selected from the
    /// requirements.
    pub fn resolve_strategy(&self) -> Result<Strategy, StrategyError> {
        match self.strategy {
            Some(strategy) => Ok(strategy),
            None => Strategy::select(self.requirements),
        }
    }
}
