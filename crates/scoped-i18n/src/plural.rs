use crate::Params;
use serde_json::Value;

const ONE: &str = "one";
const OTHER: &str = "other";

/// Picks `one` or `other` from a `{"one": .., "other": ..}` translation.
///
/// Only applies when the value has both forms and the params carry a
/// `count`. A count that coerces to exactly 1 selects `one`, anything else
/// (including non-numeric counts) selects `other`.
pub fn resolve_one_other<'a>(value: &'a Value, params: Option<&Params>) -> &'a Value {
    let Value::Object(forms) = value else {
        return value;
    };

    let Some(count) = params.and_then(Params::count) else {
        return value;
    };

    match (forms.get(ONE), forms.get(OTHER)) {
        (Some(one), Some(other)) => {
            if coerce_count(count) == 1.0 {
                one
            } else {
                other
            }
        }
        _ => value,
    }
}

/// Numeric value of a count, with lenient coercion:
///
/// - numbers as is
/// - strings are trimmed, an empty string is 0, `0x`/`0o`/`0b` prefixes
///   select a radix, `Infinity` is accepted and anything not numeric is NaN
/// - `true` is 1, `false` and null are 0
/// - an empty array is 0, a single element array counts as its element
///   and any other array or object is NaN
///
/// A NaN count never selects `one`.
pub fn coerce_count(count: &Value) -> f64 {
    match count {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_count(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [item] => coerce_element(item),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// An array element is coerced through its text form, so booleans are
/// not numeric there and null reads as an empty string
fn coerce_element(item: &Value) -> f64 {
    match item {
        Value::Null => 0.0,
        Value::Bool(_) | Value::Object(_) => f64::NAN,
        other => coerce_count(other),
    }
}

fn parse_count(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.starts_with('+') {
            return f64::NAN;
        }
        return u64::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // `str::parse` also takes "inf" and "nan", which are not counts
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}
