//! Calculator that owns an engine state and applies intents to it.

use crate::builder::CalculatorBuilder;
use crate::core::{AngleMode, Digit, EngineState, Intent, MemoryOp, Operator, ScientificFunction};
use crate::input::intent_for_key;

/// Stateful calculator: the imperative shell around [`EngineState`].
///
/// Every intent is applied to completion before the next one, and only
/// through `&mut self`, so no partially updated state is ever observable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculator {
    state: EngineState,
}

impl Calculator {
    /// Create a calculator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a calculator.
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// Resume from an existing state.
    pub fn from_state(state: EngineState) -> Self {
        Self { state }
    }

    /// Current state for rendering (pure).
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Current display text (pure).
    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn into_state(self) -> EngineState {
        self.state
    }

    /// Apply one intent and return the resulting state.
    pub fn dispatch(&mut self, intent: Intent) -> &EngineState {
        let was_error = self.state.is_error();
        self.state = std::mem::take(&mut self.state).apply(intent);

        if self.state.is_error() && !was_error {
            log::debug!("Intent '{}' produced an arithmetic error", intent);
        }
        log::debug!(
            "Applied '{}': display='{}' expression='{}'",
            intent,
            self.state.display(),
            self.state.expression()
        );

        &self.state
    }

    /// Route a keyboard key through [`intent_for_key`].
    ///
    /// Returns `false` (and leaves the state untouched) for unmapped keys.
    pub fn press_key(&mut self, key: &str) -> bool {
        match intent_for_key(key) {
            Some(intent) => {
                self.dispatch(intent);
                true
            }
            None => {
                log::trace!("Ignoring unmapped key '{}'", key);
                false
            }
        }
    }

    pub fn input_digit(&mut self, digit: Digit) -> &EngineState {
        self.dispatch(Intent::Digit(digit))
    }

    pub fn input_decimal(&mut self) -> &EngineState {
        self.dispatch(Intent::DecimalPoint)
    }

    pub fn clear_all(&mut self) -> &EngineState {
        self.dispatch(Intent::ClearAll)
    }

    pub fn clear_entry(&mut self) -> &EngineState {
        self.dispatch(Intent::ClearEntry)
    }

    pub fn toggle_sign(&mut self) -> &EngineState {
        self.dispatch(Intent::ToggleSign)
    }

    pub fn percentage(&mut self) -> &EngineState {
        self.dispatch(Intent::Percentage)
    }

    pub fn apply_operator(&mut self, operator: Operator) -> &EngineState {
        self.dispatch(Intent::Operator(operator))
    }

    pub fn equals(&mut self) -> &EngineState {
        self.dispatch(Intent::Equals)
    }

    pub fn scientific_function(&mut self, function: ScientificFunction) -> &EngineState {
        self.dispatch(Intent::Function(function))
    }

    pub fn memory(&mut self, op: MemoryOp) -> &EngineState {
        self.dispatch(Intent::Memory(op))
    }

    pub fn backspace(&mut self) -> &EngineState {
        self.dispatch(Intent::Backspace)
    }

    pub fn toggle_angle_mode(&mut self) -> &EngineState {
        self.dispatch(Intent::ToggleAngleMode)
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) -> &EngineState {
        self.dispatch(Intent::SetAngleMode(mode))
    }

    /// Drop all completed calculations from history.
    pub fn clear_history(&mut self) {
        self.state = std::mem::take(&mut self.state).clear_history();
        log::debug!("Cleared calculation history");
    }
}
