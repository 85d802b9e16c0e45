//! Error types for the registrar protocol layer.

mod registrar;
mod strategy;

pub use registrar::*;
pub use strategy::*;
