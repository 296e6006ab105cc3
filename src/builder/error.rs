//! Build errors for calculator configuration.

use thiserror::Error;

/// A single problem with a calculator configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Input limit must be at least 1 character")]
    ZeroInputLimit,

    #[error("Initial memory must be finite, got {0}")]
    NonFiniteMemory(f64),
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    /// Every violation found, not just the first.
    #[error("Invalid calculator configuration ({} violation(s))", .violations.len())]
    InvalidConfig { violations: Vec<ConfigViolation> },
}

impl BuildError {
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::InvalidConfig { violations } => violations,
        }
    }
}
