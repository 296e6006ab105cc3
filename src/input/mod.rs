//! Input adapters that turn caller events into intents.
//!
//! These mappings sit outside the engine: the engine only ever sees
//! [`Intent`](crate::core::Intent) values.

mod keymap;

pub use keymap::intent_for_key;
