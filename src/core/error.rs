//! Errors raised when building intents from external input.
//!
//! Arithmetic failures never appear here: they surface as the
//! [`ERROR_DISPLAY`](super::ERROR_DISPLAY) sentinel on the display.

use thiserror::Error;

/// Errors that can occur when converting caller input into an intent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(String),

    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("Unknown scientific function '{0}'")]
    UnknownFunction(String),

    #[error("Unknown memory operation '{0}'")]
    UnknownMemoryOp(String),
}
