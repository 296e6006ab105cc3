//! Binary operators and their reduction.

use super::error::IntentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary operator that can be pending between two operands.
///
/// Operators carry no precedence: the engine reduces them strictly left to
/// right as each new operator arrives.
///
/// # Example
///
/// ```rust
/// use calcore::core::Operator;
///
/// assert_eq!(Operator::Add.reduce(2.0, 3.0), 5.0);
/// assert_eq!(Operator::Power.reduce(2.0, 10.0), 1024.0);
/// assert!(Operator::Divide.reduce(1.0, 0.0).is_nan());
/// assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    /// Symbol shown on the keypad and in expression traces.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Combine two operands (pure).
    ///
    /// Division by zero yields NaN rather than an infinity, so it always
    /// shows as an error regardless of the dividend's sign.
    pub fn reduce(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right == 0.0 {
                    f64::NAN
                } else {
                    left / right
                }
            }
            Self::Power => left.powf(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = IntentError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim() {
            "+" => Ok(Self::Add),
            "−" | "-" => Ok(Self::Subtract),
            "×" | "*" | "x" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "^" | "xʸ" => Ok(Self::Power),
            other => Err(IntentError::UnknownOperator(other.to_string())),
        }
    }
}
