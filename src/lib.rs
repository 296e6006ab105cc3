//! Calcore: a pure state machine engine for a pocket calculator
//!
//! Calcore follows the "pure core, imperative shell" philosophy. The core
//! is a single [`EngineState`] value and a set of pure transitions, one per
//! user intent. The shell, [`Calculator`], owns that value, applies intents
//! one at a time and logs what happened.
//!
//! # Core Concepts
//!
//! - **Intent**: a discrete user action (digit, operator, equals, function...)
//! - **Chaining**: operators reduce strictly left to right, with no precedence
//! - **Sentinel error**: arithmetic with no finite result shows `"Error"`
//!   on the display; no Rust error is ever raised for it
//!
//! # Example
//!
//! ```rust
//! use calcore::core::{Digit, Operator, ScientificFunction};
//! use calcore::Calculator;
//!
//! let mut calculator = Calculator::new();
//!
//! // 2 + 3 × 4 chains left to right: (2 + 3) × 4
//! calculator.input_digit(Digit::new(2).unwrap());
//! calculator.apply_operator(Operator::Add);
//! calculator.input_digit(Digit::new(3).unwrap());
//! calculator.apply_operator(Operator::Multiply);
//! calculator.input_digit(Digit::new(4).unwrap());
//! assert_eq!(calculator.equals().display(), "20");
//!
//! calculator.scientific_function(ScientificFunction::Sqrt);
//! assert_eq!(calculator.display(), "4.472135955");
//!
//! assert_eq!(calculator.state().history().latest(), Some("5 × 4 = 20"));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod input;

// Re-export commonly used types
pub use crate::builder::{BuildError, CalculatorBuilder};
pub use crate::core::{EngineState, Intent};
pub use crate::engine::Calculator;
