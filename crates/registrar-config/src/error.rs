//! Configuration errors.

use registrar_protocols::StrategyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid config format: {0}")]
    InvalidFormat(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_protocols::{Requirements, Strategy};

    #[test]
    fn test_not_found_error() {
        let err = ConfigError::NotFound("registrar.toml".to_string());
        assert!(err.to_string().contains("registrar.toml"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_format_error() {
        let err = ConfigError::InvalidFormat("expected table".to_string());
        assert!(err.to_string().contains("expected table"));
        assert!(err.to_string().contains("Invalid"));
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::InvalidValue {
            field: "registrar.strategy".to_string(),
            message: "does not satisfy requirements".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("registrar.strategy"));
        assert!(display.contains("does not satisfy"));
    }

    #[test]
    fn test_env_var_not_set_error() {
        let err = ConfigError::EnvVarNotSet("REGISTRAR_STRATEGY".to_string());
        assert!(err.to_string().contains("REGISTRAR_STRATEGY"));
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_strategy_error_from() {
        let err = ConfigError::from(StrategyError::NotThreadSafe(Strategy::Weak));
        assert!(err.to_string().contains("Strategy error"));
        assert!(err.to_string().contains("weak"));

        let err = ConfigError::from(StrategyError::Unsatisfiable(Requirements::default()));
        assert!(matches!(err, ConfigError::Strategy(_)));
    }

    #[test]
    fn test_error_debug() {
        let err = ConfigError::NotFound("test.toml".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
