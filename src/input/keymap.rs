//! Keyboard key names to intents.

use crate::core::{Digit, Intent, Operator};

/// Map a key name to the intent it triggers.
///
/// Key names follow the DOM `KeyboardEvent.key` convention (`"Enter"`,
/// `"Escape"`, `"Backspace"`, or the typed character). Unmapped keys yield
/// `None` and should be ignored.
///
/// # Example
///
/// ```rust
/// use calcore::core::{Intent, Operator};
/// use calcore::input::intent_for_key;
///
/// assert_eq!(intent_for_key("*"), Some(Intent::Operator(Operator::Multiply)));
/// assert_eq!(intent_for_key("Enter"), Some(Intent::Equals));
/// assert_eq!(intent_for_key("Tab"), None);
/// ```
pub fn intent_for_key(key: &str) -> Option<Intent> {
    let intent = match key {
        "." => Intent::DecimalPoint,
        "+" => Intent::Operator(Operator::Add),
        "-" => Intent::Operator(Operator::Subtract),
        "*" => Intent::Operator(Operator::Multiply),
        "/" => Intent::Operator(Operator::Divide),
        "Enter" | "=" => Intent::Equals,
        "Escape" => Intent::ClearAll,
        "Backspace" => Intent::Backspace,
        _ => return single_digit(key).map(Intent::Digit),
    };
    Some(intent)
}

fn single_digit(key: &str) -> Option<Digit> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::try_from(c).ok(),
        _ => None,
    }
}
