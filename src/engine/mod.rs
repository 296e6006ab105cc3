//! Imperative shell around the pure core.
//!
//! [`Calculator`] owns a single [`EngineState`](crate::core::EngineState),
//! applies intents to it one at a time and logs each transition through the
//! `log` facade. All arithmetic stays in [`crate::core`].

mod calculator;

pub use calculator::Calculator;
