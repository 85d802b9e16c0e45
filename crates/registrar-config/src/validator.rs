//! Configuration validation.

use registrar_protocols::Strategy;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        match config.registrar.strategy {
            Some(strategy) => Self::validate_explicit(config, strategy, &mut result),
            None => Self::validate_requirements(config, &mut result),
        }

        Ok(result)
    }

    /// Validate the configuration and resolve the strategy it names.
    ///
    /// Fails on the first validation error; warnings are dropped.
    pub fn resolve(config: &Config) -> Result<Strategy, ConfigError> {
        let result = Self::validate(config)?;
        if let Some(error) = result.errors.into_iter().next() {
            return Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            });
        }
        Ok(config.registrar.resolve_strategy()?)
    }

    fn validate_explicit(config: &Config, strategy: Strategy, result: &mut ValidationResult) {
        let requirements = config.registrar.requirements;
        let caps = strategy.capabilities();

        if !strategy.satisfies(requirements) {
            result.add_error(ValidationError::new(
                "registrar.strategy",
                format!("Strategy '{}' does not satisfy {}", strategy, requirements),
            ));
        }

        // Synchronization nobody asked for
        if caps.thread_safe && !requirements.thread_safe {
            result.add_warning(ValidationWarning::new(
                "registrar.strategy",
                format!(
                    "Strategy '{}' is thread-safe but thread_safe is not required",
                    strategy
                ),
            ));
        }

        if caps.weak && !requirements.weak {
            result.add_warning(ValidationWarning::new(
                "registrar.strategy",
                "Weak strategy drops listeners referenced only by the registrar",
            ));
        }
    }

    fn validate_requirements(config: &Config, result: &mut ValidationResult) {
        let requirements = config.registrar.requirements;
        if Strategy::select(requirements).is_err() {
            result.add_error(ValidationError::new(
                "registrar.requirements",
                format!("No strategy satisfies {}", requirements),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
