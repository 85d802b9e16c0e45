//! Registration contract errors.

use std::fmt;

use thiserror::Error;

/// Contract operation that rejected its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => f.write_str("add"),
            Operation::Remove => f.write_str("remove"),
        }
    }
}

/// The only failure mode of the registration contract.
///
/// Duplicate adds, absent removes, mutation during traversal and expired weak
/// entries are all defined, silent behaviors and never surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrarError {
    #[error("Invalid argument to {operation}: listener cannot be empty")]
    InvalidArgument { operation: Operation },
}
