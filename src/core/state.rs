//! The calculator engine's state value.
//!
//! [`EngineState`] is the single value threaded through every transition.
//! All accessors are pure; transitions live in `transition.rs`.

use super::format::{format_number, parse_display, ERROR_DISPLAY};
use super::function::AngleMode;
use super::history::CalculationHistory;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Display value of a fresh or cleared engine.
pub const INITIAL_DISPLAY: &str = "0";

/// The left operand and operator of a binary operation awaiting its right
/// operand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

impl PendingOperation {
    /// Reduce with the right operand (pure).
    pub fn resolve(self, right: f64) -> f64 {
        self.operator.reduce(self.operand, right)
    }
}

/// Complete state of the calculator engine.
///
/// The display is always a numeric literal, `"0"`, or the `"Error"`
/// sentinel. It is never empty.
///
/// # Example
///
/// ```rust
/// use calcore::core::{Digit, EngineState, Intent, Operator};
///
/// let state = EngineState::new()
///     .apply(Intent::Digit(Digit::new(7).unwrap()))
///     .apply(Intent::Operator(Operator::Multiply))
///     .apply(Intent::Digit(Digit::new(6).unwrap()))
///     .apply(Intent::Equals);
///
/// assert_eq!(state.display(), "42");
/// assert_eq!(state.history().latest(), Some("7 × 6 = 42"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub(crate) display: String,
    pub(crate) expression: String,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) waiting_for_operand: bool,
    pub(crate) history: CalculationHistory,
    pub(crate) memory: f64,
    pub(crate) angle_mode: AngleMode,
    pub(crate) input_limit: Option<usize>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// Fresh state: display `"0"`, nothing pending, empty history, zero
    /// memory, radians.
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            expression: String::new(),
            pending: None,
            waiting_for_operand: false,
            history: CalculationHistory::new(),
            memory: 0.0,
            angle_mode: AngleMode::default(),
            input_limit: None,
        }
    }

    pub(crate) fn configured(
        history: CalculationHistory,
        angle_mode: AngleMode,
        input_limit: Option<usize>,
        memory: f64,
    ) -> Self {
        Self {
            history,
            angle_mode,
            input_limit,
            memory,
            ..Self::new()
        }
    }

    /// Current entered or result value, formatted for presentation.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Numeric value of the display. NaN when the display shows an error.
    pub fn value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Trace of the in-progress operation, e.g. `"12 +"`. Empty when
    /// nothing is pending.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Left operand of the pending operation.
    pub fn stored_value(&self) -> Option<f64> {
        self.pending.map(|pending| pending.operand)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|pending| pending.operator)
    }

    /// Whether the next digit replaces the display instead of extending it.
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Memory formatted like the display.
    pub fn memory_display(&self) -> String {
        format_number(self.memory)
    }

    /// Whether memory holds anything worth indicating.
    ///
    /// Renderers use this to light the `M` indicator on the display.
    pub fn has_memory(&self) -> bool {
        self.memory != 0.0
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Longest display that digit entry may extend to.
    pub fn input_limit(&self) -> Option<usize> {
        self.input_limit
    }

    /// Whether the display shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }
}
