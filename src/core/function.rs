//! Unary scientific functions and angle handling.

use super::error::IntentError;
use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

/// Largest integer whose factorial is finite as an `f64`.
pub const MAX_FACTORIAL: f64 = 170.0;

/// How trigonometric functions interpret the displayed value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        }
    }

    /// Convert an angle in this mode to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle * PI / 180.0,
        }
    }

    /// Short indicator label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Radians => "RAD",
            Self::Degrees => "DEG",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unary function applied to the displayed operand in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Ln,
    Log10,
    Sqrt,
    Square,
    Cube,
    Reciprocal,
    Factorial,
    Pi,
    Euler,
    Abs,
}

impl ScientificFunction {
    pub const ALL: [ScientificFunction; 13] = [
        ScientificFunction::Sin,
        ScientificFunction::Cos,
        ScientificFunction::Tan,
        ScientificFunction::Ln,
        ScientificFunction::Log10,
        ScientificFunction::Sqrt,
        ScientificFunction::Square,
        ScientificFunction::Cube,
        ScientificFunction::Reciprocal,
        ScientificFunction::Factorial,
        ScientificFunction::Pi,
        ScientificFunction::Euler,
        ScientificFunction::Abs,
    ];

    /// Keypad label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log10 => "log",
            Self::Sqrt => "√",
            Self::Square => "x²",
            Self::Cube => "x³",
            Self::Reciprocal => "1/x",
            Self::Factorial => "x!",
            Self::Pi => "π",
            Self::Euler => "e",
            Self::Abs => "abs",
        }
    }

    /// Whether the result depends on [`AngleMode`].
    ///
    /// Renderers use this to show the RAD/DEG indicator beside the keys it
    /// affects.
    pub fn uses_angle(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Evaluate the function (pure). Invalid inputs yield NaN or an
    /// infinity, never a panic.
    pub fn apply(self, value: f64, angle_mode: AngleMode) -> f64 {
        match self {
            Self::Sin => angle_mode.to_radians(value).sin(),
            Self::Cos => angle_mode.to_radians(value).cos(),
            Self::Tan => angle_mode.to_radians(value).tan(),
            Self::Ln => value.ln(),
            Self::Log10 => value.log10(),
            Self::Sqrt => value.sqrt(),
            Self::Square => value * value,
            Self::Cube => value * value * value,
            Self::Reciprocal => 1.0 / value,
            Self::Factorial => factorial(value),
            Self::Pi => PI,
            Self::Euler => E,
            Self::Abs => value.abs(),
        }
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScientificFunction {
    type Err = IntentError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim() {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "ln" => Ok(Self::Ln),
            "log" => Ok(Self::Log10),
            "√" | "sqrt" => Ok(Self::Sqrt),
            "x²" | "x^2" => Ok(Self::Square),
            "x³" | "x^3" => Ok(Self::Cube),
            "1/x" => Ok(Self::Reciprocal),
            "x!" | "!" => Ok(Self::Factorial),
            "π" | "pi" => Ok(Self::Pi),
            "e" => Ok(Self::Euler),
            "abs" | "|x|" => Ok(Self::Abs),
            other => Err(IntentError::UnknownFunction(other.to_string())),
        }
    }
}

/// Factorial of a non-negative integer.
///
/// Negative, fractional and non-finite inputs give NaN. Inputs above
/// [`MAX_FACTORIAL`] overflow, so they return infinity without iterating.
///
/// # Example
///
/// ```rust
/// use calcore::core::factorial;
///
/// assert_eq!(factorial(5.0), 120.0);
/// assert_eq!(factorial(0.0), 1.0);
/// assert!(factorial(-1.0).is_nan());
/// assert!(factorial(2.5).is_nan());
/// ```
pub fn factorial(n: f64) -> f64 {
    if n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if n > MAX_FACTORIAL {
        return f64::INFINITY;
    }

    let mut product = 1.0;
    for factor in 2..=(n as u32) {
        product *= f64::from(factor);
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-12
    }

    #[test]
    fn factorial_of_small_integers() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(10.0), 3_628_800.0);
    }

    #[test]
    fn factorial_rejects_invalid_input() {
        assert!(factorial(-1.0).is_nan());
        assert!(factorial(2.5).is_nan());
        assert!(factorial(f64::NAN).is_nan());
        assert!(factorial(f64::INFINITY).is_nan());
    }

    #[test]
    fn factorial_overflow_is_infinite() {
        assert!(factorial(MAX_FACTORIAL).is_finite());
        assert_eq!(factorial(171.0), f64::INFINITY);
        assert_eq!(factorial(1e12), f64::INFINITY);
    }

    #[test]
    fn trig_respects_angle_mode() {
        assert!(close(ScientificFunction::Sin.apply(PI / 2.0, AngleMode::Radians), 1.0));
        assert!(close(ScientificFunction::Sin.apply(90.0, AngleMode::Degrees), 1.0));
        assert!(close(ScientificFunction::Cos.apply(180.0, AngleMode::Degrees), -1.0));
        assert!(close(ScientificFunction::Tan.apply(45.0, AngleMode::Degrees), 1.0));
    }

    #[test]
    fn non_trig_functions_ignore_angle_mode() {
        for function in ScientificFunction::ALL {
            if function.uses_angle() {
                continue;
            }
            let radians = function.apply(4.0, AngleMode::Radians);
            let degrees = function.apply(4.0, AngleMode::Degrees);
            assert_eq!(radians.to_bits(), degrees.to_bits(), "{function}");
        }
    }

    #[test]
    fn logs_and_roots() {
        assert!(close(ScientificFunction::Log10.apply(1000.0, AngleMode::Radians), 3.0));
        assert_eq!(ScientificFunction::Ln.apply(1.0, AngleMode::Radians), 0.0);
        assert_eq!(ScientificFunction::Sqrt.apply(81.0, AngleMode::Radians), 9.0);
        assert!(ScientificFunction::Sqrt.apply(-1.0, AngleMode::Radians).is_nan());
        assert!(ScientificFunction::Log10.apply(-10.0, AngleMode::Radians).is_nan());
        assert_eq!(
            ScientificFunction::Ln.apply(0.0, AngleMode::Radians),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn powers_reciprocal_and_abs() {
        assert_eq!(ScientificFunction::Square.apply(-3.0, AngleMode::Radians), 9.0);
        assert_eq!(ScientificFunction::Cube.apply(-3.0, AngleMode::Radians), -27.0);
        assert_eq!(ScientificFunction::Reciprocal.apply(4.0, AngleMode::Radians), 0.25);
        assert_eq!(ScientificFunction::Abs.apply(-2.5, AngleMode::Radians), 2.5);
    }

    #[test]
    fn constants_ignore_input() {
        assert_eq!(ScientificFunction::Pi.apply(123.0, AngleMode::Radians), PI);
        assert_eq!(ScientificFunction::Euler.apply(f64::NAN, AngleMode::Radians), E);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for function in ScientificFunction::ALL {
            assert_eq!(function.label().parse::<ScientificFunction>(), Ok(function));
        }
        assert!("tanh".parse::<ScientificFunction>().is_err());
    }

    #[test]
    fn angle_mode_toggles() {
        assert_eq!(AngleMode::default(), AngleMode::Radians);
        assert_eq!(AngleMode::Radians.toggled(), AngleMode::Degrees);
        assert_eq!(AngleMode::Degrees.toggled().label(), "RAD");
    }
}
