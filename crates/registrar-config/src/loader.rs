//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_protocols::Strategy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert!(config.registrar.strategy.is_none());
        assert_eq!(config.registrar.resolve_strategy().unwrap(), Strategy::Ordered);
    }

    #[test]
    fn test_load_explicit_strategy() {
        let content = r#"
            [registrar]
            strategy = "unordered"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.registrar.strategy, Some(Strategy::Unordered));
    }

    #[test]
    fn test_load_every_strategy_name() {
        for strategy in Strategy::ALL {
            let content = format!("[registrar]\nstrategy = \"{}\"\n", strategy);
            let config = ConfigLoader::load_str(&content).unwrap();
            assert_eq!(config.registrar.strategy, Some(strategy));
        }
    }

    #[test]
    fn test_load_requirements() {
        let content = r#"
            [registrar.requirements]
            thread_safe = true
            ordered = true
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert!(config.registrar.requirements.thread_safe);
        assert!(config.registrar.requirements.ordered);
        assert!(!config.registrar.requirements.weak);
        assert_eq!(
            config.registrar.resolve_strategy().unwrap(),
            Strategy::ThreadSafe
        );
    }

    #[test]
    fn test_load_unknown_strategy() {
        let content = r#"
            [registrar]
            strategy = "round_robin"
        "#;
        let result = ConfigLoader::load_str(content);
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[registrar]").unwrap();
        writeln!(file, "strategy = \"weak\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.registrar.strategy, Some(Strategy::Weak));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/registrar.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "invalid = [unclosed";
        let result = ConfigLoader::load_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("REGISTRAR_TEST_STRATEGY", "thread_safe");
        }
        let content = "[registrar]\nstrategy = \"${REGISTRAR_TEST_STRATEGY}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.registrar.strategy, Some(Strategy::ThreadSafe));
        unsafe {
            std::env::remove_var("REGISTRAR_TEST_STRATEGY");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_TEST_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }
}
