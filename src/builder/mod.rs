//! Builder API for configuring calculators.
//!
//! Configuration is validated with Stillwater's `Validation`, so a bad
//! configuration reports every problem at once instead of the first one.

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::{BuildError, ConfigViolation};
