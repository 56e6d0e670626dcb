//! Numeric coercion and fixed-point formatting.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// First run of four ASCII digits anywhere in a string.
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("Invalid year regex"));

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Coerces a JSON value to a finite number.
///
/// Numbers and numeric strings are accepted. Null, booleans, blank or
/// non-numeric strings, containers and non-finite results are `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_f64(text),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Extracts a year from a JSON value holding either a number or a string
/// that contains a four-digit year (`2001`, `"2001"`, `"FY2001"`, `"2001-01-01"`).
pub fn parse_year(value: &Value) -> Option<i32> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        _ => return None,
    };
    YEAR_PATTERN.find(&text)?.as_str().parse().ok()
}

/// Formats `value` with `precision` decimals, optionally dropping a trailing `.0`.
///
/// Digits come from the exact binary value. A value lying exactly halfway
/// between two outputs rounds away from zero (`2.25` → `"2.3"`), while a
/// value merely printed as a tie keeps its true side (`1.005` → `"1.00"`).
pub fn format_fixed(value: f64, precision: usize, strip_trailing_zero: bool) -> String {
    let value = if is_decimal_tie(value, precision) {
        if value > 0.0 {
            value.next_up()
        } else {
            value.next_down()
        }
    } else {
        value
    };
    let formatted = format!("{value:.precision$}");
    if strip_trailing_zero
        && let Some(stripped) = formatted.strip_suffix(".0")
    {
        return stripped.to_string();
    }
    formatted
}

/// Whether `value` lies exactly halfway between two multiples of `10^-precision`.
///
/// With `value = m * 2^e` and `m` odd, `value * 10^precision` is an odd
/// multiple of one half only when `e == -(precision + 1)`.
fn is_decimal_tie(value: f64, precision: usize) -> bool {
    if value == 0.0 || !value.is_finite() {
        return false;
    }
    let bits = value.abs().to_bits();
    let biased_exponent = i64::try_from(bits >> 52).unwrap_or(0);
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased_exponent - 1075)
    };
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    i64::try_from(precision).is_ok_and(|precision| exponent == -(precision + 1))
}
