//! Display formatting and parsing for calculator values.
//!
//! The display is the single source of truth for the current operand, so
//! every number that reaches it goes through [`format_number`] and every
//! number read back out goes through [`parse_display`]. Both functions are
//! pure and total.

/// Display sentinel for results that cannot be represented.
pub const ERROR_DISPLAY: &str = "Error";

/// Plain renderings longer than this are reduced to [`SIGNIFICANT_DIGITS`].
const MAX_PLAIN_LENGTH: usize = 12;

/// Significant digits kept when a plain rendering is too long.
const SIGNIFICANT_DIGITS: i32 = 10;

/// Fraction digits requested when reading a value's exact expansion.
const EXACT_EXPANSION_DIGITS: usize = 96;

/// Format a number for the display.
///
/// - NaN and infinities become [`ERROR_DISPLAY`].
/// - Values whose shortest rendering needs an exponent are shown with six
///   fraction digits in exponential form (`1.234568e+25`).
/// - Plain renderings longer than twelve characters are cut to ten
///   significant digits, ties rounding away from zero, with trailing
///   fractional zeros removed.
/// - Everything else is shown in its shortest plain form.
///
/// # Example
///
/// ```rust
/// use calcore::core::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
/// assert_eq!(format_number(2f64.powi(80)), "1.208926e+24");
/// assert_eq!(format_number(f64::NAN), "Error");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    let plain = shortest_repr(value);
    if plain.contains('e') {
        exponential(value)
    } else if plain.len() > MAX_PLAIN_LENGTH {
        significant(value)
    } else {
        plain
    }
}

/// Parse the leading numeric prefix of a display string.
///
/// Anything after the longest valid prefix is ignored. A string with no
/// numeric prefix at all (such as [`ERROR_DISPLAY`]) parses as NaN, which
/// keeps arithmetic on an error display in the error state.
///
/// # Example
///
/// ```rust
/// use calcore::core::parse_display;
///
/// assert_eq!(parse_display("12.5"), 12.5);
/// assert_eq!(parse_display("0."), 0.0);
/// assert_eq!(parse_display("1.5e+3"), 1500.0);
/// assert!(parse_display("Error").is_nan());
/// ```
pub fn parse_display(text: &str) -> f64 {
    let text = text.trim_start();
    let end = numeric_prefix_len(text);
    text[..end].parse().unwrap_or(f64::NAN)
}

/// Whether the whole string is a numeric literal the display may hold.
pub fn is_numeric_literal(text: &str) -> bool {
    !text.is_empty() && numeric_prefix_len(text) == text.len()
}

fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let is_digit_at = |index: usize| bytes.get(index).is_some_and(u8::is_ascii_digit);

    let mut index = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        index += 1;
    }

    let integer_start = index;
    while is_digit_at(index) {
        index += 1;
    }
    let mut digits = index - integer_start;

    if bytes.get(index) == Some(&b'.') {
        let fraction_start = index + 1;
        let mut cursor = fraction_start;
        while is_digit_at(cursor) {
            cursor += 1;
        }
        let fraction = cursor - fraction_start;
        if digits + fraction > 0 {
            index = cursor;
            digits += fraction;
        }
    }

    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(index), Some(b'e' | b'E')) {
        let mut cursor = index + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_start = cursor;
        while is_digit_at(cursor) {
            cursor += 1;
        }
        if cursor > exponent_start {
            index = cursor;
        }
    }

    index
}

/// Shortest round-trip rendering, plain from 1e-6 up to 1e21 and
/// exponential outside that range. Negative zero renders as `"0"`.
fn shortest_repr(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = split_exponent(&scientific);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    // `point` is where the decimal point falls relative to `digits`.
    let count = digits.len() as i32;
    let point = exponent + 1;

    let body = if count <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - count) as usize))
    } else if 0 < point && point <= 21 {
        let (integer, fraction) = digits.split_at(point as usize);
        format!("{integer}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{}", signed_exponent(point - 1))
        } else {
            format!("{lead}.{rest}e{}", signed_exponent(point - 1))
        }
    };

    format!("{sign}{body}")
}

/// Six fraction digits in exponential form, e.g. `-1.500000e-8`.
fn exponential(value: f64) -> String {
    let scientific = format!("{:.6e}", value);
    let (mantissa, exponent) = split_exponent(&scientific);
    format!("{mantissa}e{}", signed_exponent(exponent))
}

/// Ten significant digits with trailing fractional zeros trimmed.
///
/// Ties round away from zero. `{:e}` formatting rounds ties to even, so the
/// digits are cut by hand from the exact decimal expansion.
fn significant(value: f64) -> String {
    let precision = SIGNIFICANT_DIGITS as usize;
    let (digits, exponent) = rounded_digits(value.abs(), precision);
    let sign = if value.is_sign_negative() { "-" } else { "" };

    let body = if exponent < -6 || exponent >= SIGNIFICANT_DIGITS {
        let (lead, rest) = digits.split_at(1);
        let mantissa = format!("{lead}.{rest}");
        format!("{}e{}", trim_fraction(&mantissa), signed_exponent(exponent))
    } else if exponent >= 0 {
        let (integer, fraction) = digits.split_at(exponent as usize + 1);
        trim_fraction(&format!("{integer}.{fraction}")).to_string()
    } else {
        let zeros = "0".repeat((-exponent - 1) as usize);
        trim_fraction(&format!("0.{zeros}{digits}")).to_string()
    };

    format!("{sign}{body}")
}

/// First `precision` significant digits of a positive value, rounded half
/// up, with the decimal exponent of the leading digit.
fn rounded_digits(magnitude: f64, precision: usize) -> (String, i32) {
    // Values in the plain range have well under 96 significant digits, so
    // this expansion is exact.
    let exact = format!("{:.*e}", EXACT_EXPANSION_DIGITS, magnitude);
    let (mantissa, mut exponent) = split_exponent(&exact);

    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let round_up = digits.get(precision).is_some_and(|&digit| digit >= b'5');
    digits.truncate(precision);

    if round_up {
        match digits.iter().rposition(|&digit| digit != b'9') {
            Some(index) => {
                digits[index] += 1;
                digits[index + 1..].fill(b'0');
            }
            None => {
                digits.fill(b'0');
                digits[0] = b'1';
                exponent += 1;
            }
        }
    }

    (String::from_utf8_lossy(&digits).into_owned(), exponent)
}

fn split_exponent(scientific: &str) -> (&str, i32) {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (scientific, 0),
    }
}

fn signed_exponent(exponent: i32) -> String {
    if exponent >= 0 {
        format!("+{exponent}")
    } else {
        exponent.to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
