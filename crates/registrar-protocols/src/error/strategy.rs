//! Strategy selection and construction errors.

use thiserror::Error;

use crate::strategy::{Requirements, Strategy};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("Strategy is not thread-safe: {0}")]
    NotThreadSafe(Strategy),

    #[error("No registrar strategy satisfies {0}")]
    Unsatisfiable(Requirements),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_thread_safe_error() {
        let err = StrategyError::NotThreadSafe(Strategy::Weak);
        let display = err.to_string();
        assert!(display.contains("not thread-safe"));
        assert!(display.contains("weak"));
    }

    #[test]
    fn test_unsatisfiable_error() {
        let err = StrategyError::Unsatisfiable(Requirements {
            thread_safe: true,
            ordered: false,
            weak: true,
        });
        let display = err.to_string();
        assert!(display.contains("No registrar strategy"));
        assert!(display.contains("thread_safe"));
        assert!(display.contains("weak"));
    }

    #[test]
    fn test_all_error_variants_display() {
        let errors = vec![
            StrategyError::NotThreadSafe(Strategy::Ordered),
            StrategyError::Unsatisfiable(Requirements::default()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
