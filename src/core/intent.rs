//! Discrete user intents accepted by the engine.

use super::error::IntentError;
use super::function::{AngleMode, ScientificFunction};
use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single decimal digit, 0 through 9.
///
/// # Example
///
/// ```rust
/// use calcore::core::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::new(10).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, IntentError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(IntentError::InvalidDigit(value.to_string()))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = IntentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = IntentError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|value| Self(value as u8))
            .ok_or_else(|| IntentError::InvalidDigit(c.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operations on the memory register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryOp {
    /// `M+`: add the displayed value to memory.
    Add,
    /// `M−`: subtract the displayed value from memory.
    Subtract,
    /// `MR`: show the memory value.
    Recall,
    /// `MC`: reset memory to zero.
    Clear,
}

impl MemoryOp {
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "M+",
            Self::Subtract => "M−",
            Self::Recall => "MR",
            Self::Clear => "MC",
        }
    }
}

impl fmt::Display for MemoryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MemoryOp {
    type Err = IntentError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim() {
            "M+" => Ok(Self::Add),
            "M−" | "M-" => Ok(Self::Subtract),
            "MR" => Ok(Self::Recall),
            "MC" => Ok(Self::Clear),
            other => Err(IntentError::UnknownMemoryOp(other.to_string())),
        }
    }
}

/// A discrete user action submitted to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Digit(Digit),
    DecimalPoint,
    ClearAll,
    ClearEntry,
    ToggleSign,
    Percentage,
    Operator(Operator),
    Equals,
    Function(ScientificFunction),
    Memory(MemoryOp),
    Backspace,
    ToggleAngleMode,
    SetAngleMode(AngleMode),
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::DecimalPoint => f.write_str("."),
            Self::ClearAll => f.write_str("AC"),
            Self::ClearEntry => f.write_str("CE"),
            Self::ToggleSign => f.write_str("±"),
            Self::Percentage => f.write_str("%"),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::Equals => f.write_str("="),
            Self::Function(function) => write!(f, "{function}"),
            Self::Memory(op) => write!(f, "{op}"),
            Self::Backspace => f.write_str("⌫"),
            Self::ToggleAngleMode => f.write_str("RAD/DEG"),
            Self::SetAngleMode(mode) => write!(f, "{mode}"),
        }
    }
}

impl From<Digit> for Intent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Intent {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

impl From<ScientificFunction> for Intent {
    fn from(function: ScientificFunction) -> Self {
        Self::Function(function)
    }
}

impl From<MemoryOp> for Intent {
    fn from(op: MemoryOp) -> Self {
        Self::Memory(op)
    }
}
