//! Builder for constructing calculators.

use crate::builder::error::{BuildError, ConfigViolation};
use crate::core::{AngleMode, CalculationHistory, EngineState, DEFAULT_HISTORY_CAPACITY};
use crate::engine::Calculator;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use calcore::builder::CalculatorBuilder;
/// use calcore::core::AngleMode;
///
/// let calculator = CalculatorBuilder::new()
///     .history_capacity(5)
///     .angle_mode(AngleMode::Degrees)
///     .input_limit(16)
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.state().history().capacity(), 5);
/// assert_eq!(calculator.state().angle_mode(), AngleMode::Degrees);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorBuilder {
    history_capacity: usize,
    angle_mode: AngleMode,
    input_limit: Option<usize>,
    memory: f64,
}

impl CalculatorBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            angle_mode: AngleMode::default(),
            input_limit: None,
            memory: 0.0,
        }
    }

    /// Number of completed calculations kept in history.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Initial angle interpretation for trigonometric functions.
    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = mode;
        self
    }

    /// Longest display that digit entry may extend to.
    pub fn input_limit(mut self, limit: usize) -> Self {
        self.input_limit = Some(limit);
        self
    }

    /// Initial memory register value.
    pub fn memory(mut self, value: f64) -> Self {
        self.memory = value;
        self
    }

    /// Check the configuration, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.history_capacity == 0 {
            Validation::fail(ConfigViolation::ZeroHistoryCapacity)
        } else {
            Validation::success(())
        });

        checks.push(if self.input_limit == Some(0) {
            Validation::fail(ConfigViolation::ZeroInputLimit)
        } else {
            Validation::success(())
        });

        checks.push(if self.memory.is_finite() {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::NonFiniteMemory(self.memory))
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the calculator.
    /// Returns an error listing every violation if the configuration is
    /// invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        match self.validate() {
            Validation::Success(_) => {
                let state = EngineState::configured(
                    CalculationHistory::with_capacity(self.history_capacity),
                    self.angle_mode,
                    self.input_limit,
                    self.memory,
                );
                Ok(Calculator::from_state(state))
            }
            Validation::Failure(errors) => {
                let violations: Vec<ConfigViolation> = errors.iter().cloned().collect();
                log::warn!(
                    "Rejected calculator configuration with {} violation(s)",
                    violations.len()
                );
                Err(BuildError::InvalidConfig { violations })
            }
        }
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
