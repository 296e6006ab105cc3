//! Pure calculator core.
//!
//! This module contains the functional core of the engine:
//! - The [`EngineState`] value and its pure transitions
//! - Intents, operators and scientific functions
//! - Display formatting and parsing
//! - The bounded calculation history
//!
//! Nothing here performs I/O or logging. Every transition has the shape
//! `EngineState × Intent → EngineState`.

mod error;
mod format;
mod function;
mod history;
mod intent;
mod operator;
mod state;
mod transition;

pub use error::IntentError;
pub use format::{format_number, is_numeric_literal, parse_display, ERROR_DISPLAY};
pub use function::{factorial, AngleMode, ScientificFunction, MAX_FACTORIAL};
pub use history::{CalculationHistory, DEFAULT_HISTORY_CAPACITY};
pub use intent::{Digit, Intent, MemoryOp};
pub use operator::Operator;
pub use state::{EngineState, PendingOperation, INITIAL_DISPLAY};
