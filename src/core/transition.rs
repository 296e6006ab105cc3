//! Pure state transitions.
//!
//! Each method consumes an [`EngineState`] and returns the next one. None of
//! them can fail: arithmetic that has no finite result leaves the
//! `"Error"` sentinel on the display, and the next digit replaces it.

use super::format::{format_number, is_numeric_literal};
use super::function::{AngleMode, ScientificFunction};
use super::intent::{Digit, Intent, MemoryOp};
use super::operator::Operator;
use super::state::{EngineState, PendingOperation, INITIAL_DISPLAY};

/// Display after a decimal point starts a new operand.
const FRESH_DECIMAL: &str = "0.";

impl EngineState {
    /// Apply one intent, returning the next state.
    #[must_use]
    pub fn apply(self, intent: Intent) -> Self {
        match intent {
            Intent::Digit(digit) => self.input_digit(digit),
            Intent::DecimalPoint => self.input_decimal(),
            Intent::ClearAll => self.clear_all(),
            Intent::ClearEntry => self.clear_entry(),
            Intent::ToggleSign => self.toggle_sign(),
            Intent::Percentage => self.percentage(),
            Intent::Operator(operator) => self.apply_operator(operator),
            Intent::Equals => self.equals(),
            Intent::Function(function) => self.scientific_function(function),
            Intent::Memory(op) => self.memory_op(op),
            Intent::Backspace => self.backspace(),
            Intent::ToggleAngleMode => {
                let mode = self.angle_mode.toggled();
                self.set_angle_mode(mode)
            }
            Intent::SetAngleMode(mode) => self.set_angle_mode(mode),
        }
    }

    /// Enter a digit. Replaces the display after an operator or result, or
    /// when the display is `"0"` or an error; appends otherwise.
    #[must_use]
    pub fn input_digit(mut self, digit: Digit) -> Self {
        let replace = self.waiting_for_operand
            || self.display == INITIAL_DISPLAY
            || self.is_error();

        if replace {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if !self.at_input_limit() {
            self.display.push(digit.as_char());
        }
        self
    }

    /// Enter a decimal point. A second point in the same number is ignored.
    #[must_use]
    pub fn input_decimal(mut self) -> Self {
        if self.waiting_for_operand || self.is_error() {
            self.display = FRESH_DECIMAL.to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains(|c: char| c == '.' || c == 'e')
            && !self.at_input_limit()
        {
            self.display.push('.');
        }
        self
    }

    /// Reset the calculation. Memory, history and settings survive.
    #[must_use]
    pub fn clear_all(mut self) -> Self {
        self.display = INITIAL_DISPLAY.to_string();
        self.expression.clear();
        self.pending = None;
        self.waiting_for_operand = false;
        self
    }

    /// Reset only the display.
    #[must_use]
    pub fn clear_entry(mut self) -> Self {
        self.display = INITIAL_DISPLAY.to_string();
        self
    }

    #[must_use]
    pub fn toggle_sign(mut self) -> Self {
        self.display = format_number(-self.value());
        self
    }

    /// Divide the display by 100, regardless of any pending operation.
    #[must_use]
    pub fn percentage(mut self) -> Self {
        self.display = format_number(self.value() / 100.0);
        self
    }

    /// Start or chain a binary operation.
    ///
    /// With an operation already pending, it is reduced first with the
    /// displayed operand. Operators have no precedence, so `2 + 3 × 4`
    /// evaluates as `(2 + 3) × 4`.
    #[must_use]
    pub fn apply_operator(mut self, operator: Operator) -> Self {
        let input = self.value();
        let operand = match self.pending {
            None => input,
            Some(pending) => {
                let result = pending.resolve(input);
                self.display = format_number(result);
                result
            }
        };

        self.expression = format!("{} {}", self.display, operator);
        self.pending = Some(PendingOperation { operand, operator });
        self.waiting_for_operand = true;
        self
    }

    /// Complete the pending operation and log it to history. A no-op when
    /// nothing is pending.
    #[must_use]
    pub fn equals(mut self) -> Self {
        let Some(pending) = self.pending.take() else {
            return self;
        };

        let result = format_number(pending.resolve(self.value()));
        let entry = format!("{} {} = {}", self.expression, self.display, result);
        self.history = self.history.record(entry);
        self.display = result;
        self.expression.clear();
        self.waiting_for_operand = true;
        self
    }

    /// Transform the displayed operand in place. Any pending operation is
    /// kept and picks up the new value as its right operand.
    #[must_use]
    pub fn scientific_function(mut self, function: ScientificFunction) -> Self {
        let result = function.apply(self.value(), self.angle_mode);
        self.display = format_number(result);
        self.waiting_for_operand = true;
        self
    }

    #[must_use]
    pub fn memory_op(mut self, op: MemoryOp) -> Self {
        match op {
            MemoryOp::Add => self.memory += self.value(),
            MemoryOp::Subtract => self.memory -= self.value(),
            MemoryOp::Recall => {
                self.display = format_number(self.memory);
                self.waiting_for_operand = true;
            }
            MemoryOp::Clear => self.memory = 0.0,
        }
        self
    }

    /// Drop the last display character. Falls back to `"0"` when nothing
    /// numeric would remain.
    #[must_use]
    pub fn backspace(mut self) -> Self {
        let mut display = self.display.clone();
        if display.chars().count() > 1 {
            display.pop();
        } else {
            display = INITIAL_DISPLAY.to_string();
        }

        let trimmed = display.trim_end_matches(|c: char| matches!(c, 'e' | '+' | '-'));
        self.display = if is_numeric_literal(trimmed) {
            trimmed.to_string()
        } else {
            INITIAL_DISPLAY.to_string()
        };
        self
    }

    #[must_use]
    pub fn set_angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = mode;
        self
    }

    #[must_use]
    pub fn clear_history(mut self) -> Self {
        self.history = self.history.cleared();
        self
    }

    fn at_input_limit(&self) -> bool {
        self.input_limit
            .is_some_and(|limit| self.display.chars().count() >= limit)
    }
}
