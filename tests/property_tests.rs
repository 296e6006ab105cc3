//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use calcore::core::{
    factorial, format_number, is_numeric_literal, parse_display, AngleMode, CalculationHistory,
    Digit, EngineState, Intent, MemoryOp, Operator, ScientificFunction, ERROR_DISPLAY,
};
use calcore::input::intent_for_key;
use calcore::{Calculator, CalculatorBuilder};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(value in 0u8..=9) -> Digit {
        Digit::new(value).unwrap()
    }
}

fn arbitrary_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn arbitrary_function() -> impl Strategy<Value = ScientificFunction> {
    prop::sample::select(ScientificFunction::ALL.to_vec())
}

fn arbitrary_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(Intent::Digit),
        2 => arbitrary_operator().prop_map(Intent::Operator),
        1 => arbitrary_function().prop_map(Intent::Function),
        1 => prop::sample::select(vec![
            MemoryOp::Add,
            MemoryOp::Subtract,
            MemoryOp::Recall,
            MemoryOp::Clear,
        ])
        .prop_map(Intent::Memory),
        1 => prop::sample::select(vec![
            Intent::DecimalPoint,
            Intent::ClearAll,
            Intent::ClearEntry,
            Intent::ToggleSign,
            Intent::Percentage,
            Intent::Equals,
            Intent::Backspace,
            Intent::ToggleAngleMode,
            Intent::SetAngleMode(AngleMode::Degrees),
        ]),
    ]
}

/// Whether a value avoids the magnitudes where rounding changes notation, so
/// the display would not read back to itself (`1.23456789e+11` reparses to
/// `123456789000`).
fn in_display_range(value: f64) -> bool {
    let magnitude = value.abs();
    !(9.9e9..1e12).contains(&magnitude)
        && !(9.9e-7..1e-6).contains(&magnitude)
        && !(9.9e20..1e21).contains(&magnitude)
}

fn run(intents: &[Intent]) -> EngineState {
    intents
        .iter()
        .fold(EngineState::new(), |state, intent| state.apply(*intent))
}

fn enter_number(calculator: &mut Calculator, value: u64) {
    for c in value.to_string().chars() {
        assert!(calculator.press_key(&c.to_string()));
    }
}

proptest! {
    #[test]
    fn formatted_values_round_trip(
        value in (-1e15f64..1e15).prop_filter("primary display range", |v| in_display_range(*v))
    ) {
        let formatted = format_number(value);
        prop_assert_eq!(format_number(parse_display(&formatted)), formatted);
    }

    #[test]
    fn formatted_extreme_values_round_trip(
        value in prop::num::f64::NORMAL.prop_filter("primary display range", |v| in_display_range(*v))
    ) {
        let formatted = format_number(value);
        prop_assert!(formatted != ERROR_DISPLAY);
        prop_assert_eq!(format_number(parse_display(&formatted)), formatted);
    }

    #[test]
    fn formatted_values_are_numeric_literals(value in prop::num::f64::ANY) {
        let formatted = format_number(value);
        prop_assert!(formatted == ERROR_DISPLAY || is_numeric_literal(&formatted));
        prop_assert_eq!(formatted == ERROR_DISPLAY, !value.is_finite());
    }

    #[test]
    fn binary_operation_matches_reduce(
        left in 0u64..1_000_000,
        operator in arbitrary_operator(),
        right in 0u64..1_000,
    ) {
        let mut calculator = Calculator::new();
        enter_number(&mut calculator, left);
        calculator.apply_operator(operator);
        enter_number(&mut calculator, right);
        calculator.equals();

        let expected = format_number(operator.reduce(left as f64, right as f64));
        let entry = format!("{left} {operator} {right} = {expected}");
        prop_assert_eq!(calculator.display(), expected.as_str());
        prop_assert_eq!(calculator.state().history().latest(), Some(entry.as_str()));
    }

    #[test]
    fn chained_operators_reduce_left_to_right(
        a in 1u64..1_000,
        first in arbitrary_operator(),
        b in 1u64..1_000,
        second in arbitrary_operator(),
        c in 1u64..1_000,
    ) {
        let mut calculator = Calculator::new();
        enter_number(&mut calculator, a);
        calculator.apply_operator(first);
        enter_number(&mut calculator, b);
        calculator.apply_operator(second);
        enter_number(&mut calculator, c);
        calculator.equals();

        // The pending operand keeps full precision; only the display rounds.
        let intermediate = first.reduce(a as f64, b as f64);
        let expected = format_number(second.reduce(intermediate, c as f64));
        prop_assert_eq!(calculator.display(), expected.as_str());
    }

    #[test]
    fn toggle_sign_twice_is_identity(
        entry in prop_oneof![
            (0u64..100_000_000_000).prop_map(|value| value.to_string()),
            "(0|[1-9][0-9]{0,5})\\.[0-9]{0,3}[1-9]",
        ]
    ) {
        // Entries of at most eleven characters stay plain when negated.
        let mut calculator = Calculator::new();
        for key in entry.chars() {
            prop_assert!(calculator.press_key(&key.to_string()));
        }
        let before = calculator.display().to_string();
        prop_assert_eq!(before.as_str(), entry.as_str());

        calculator.toggle_sign();
        calculator.toggle_sign();
        prop_assert_eq!(calculator.display(), before.as_str());
    }

    #[test]
    fn history_keeps_most_recent_entries(capacity in 1usize..20, count in 0usize..40) {
        let history = (0..count).fold(
            CalculationHistory::with_capacity(capacity),
            |history, i| history.record(format!("{i} + 0 = {i}")),
        );

        let kept = count.min(capacity);
        prop_assert_eq!(history.len(), kept);

        let expected: Vec<String> = (count - kept..count)
            .map(|i| format!("{i} + 0 = {i}"))
            .collect();
        prop_assert_eq!(history.entries(), expected.as_slice());
    }

    #[test]
    fn history_record_is_pure(entry in "[0-9]{1,6} \\+ [0-9]{1,6} = [0-9]{1,7}") {
        let history = CalculationHistory::new();
        let recorded = history.record(entry.clone());

        prop_assert!(history.is_empty());
        prop_assert_eq!(recorded.latest(), Some(entry.as_str()));
    }

    #[test]
    fn apply_is_deterministic(
        prefix in prop::collection::vec(arbitrary_intent(), 0..20),
        intent in arbitrary_intent(),
    ) {
        let state = run(&prefix);
        let first = state.clone().apply(intent);
        let second = state.apply(intent);

        // NaN memory or operands defeat `PartialEq`, so compare snapshots.
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn display_is_always_numeric_or_error(
        intents in prop::collection::vec(arbitrary_intent(), 0..40)
    ) {
        let state = run(&intents);
        let display = state.display();
        prop_assert!(!display.is_empty());
        prop_assert!(display == ERROR_DISPLAY || is_numeric_literal(display));
    }

    #[test]
    fn history_never_exceeds_capacity(
        intents in prop::collection::vec(arbitrary_intent(), 0..60)
    ) {
        let state = run(&intents);
        prop_assert!(state.history().len() <= state.history().capacity());
    }

    #[test]
    fn entry_respects_input_limit(
        limit in 2usize..12,
        keys in prop::collection::vec(
            prop_oneof![
                arbitrary_digit().prop_map(Intent::Digit),
                Just(Intent::DecimalPoint),
            ],
            0..30,
        ),
    ) {
        let mut calculator = CalculatorBuilder::new().input_limit(limit).build().unwrap();
        for intent in keys {
            calculator.dispatch(intent);
            prop_assert!(calculator.display().chars().count() <= limit);
        }
    }

    #[test]
    fn integer_factorials_match_product(n in 0u64..=20) {
        let expected: u64 = (1..=n).product();
        prop_assert_eq!(factorial(n as f64), expected as f64);
    }

    #[test]
    fn digit_keys_enter_their_digit(digit in arbitrary_digit()) {
        let key = digit.as_char().to_string();
        prop_assert_eq!(intent_for_key(&key), Some(Intent::Digit(digit)));
    }

    #[test]
    fn intent_roundtrip_serialization(intent in arbitrary_intent()) {
        let json = serde_json::to_string(&intent).unwrap();
        let deserialized: Intent = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(intent, deserialized);
    }
}
