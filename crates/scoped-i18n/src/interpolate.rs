use crate::path;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Number, Value};
use std::borrow::Cow;

/// `${name}`, `%{name}` and `{{name}}`
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^{}]*)\}|%\{([^{}]*)\}|\{\{([^{}]*)\}\}").expect("placeholder regex")
});

/// Replaces placeholders with values from `data`.
///
/// Names may be dotted (`%{user.name}`) and may be padded with spaces.
/// Placeholders whose value is missing, or is not a string or a number,
/// are left untouched.
pub fn interpolate<'a>(template: &'a str, data: &Map<String, Value>) -> Cow<'a, str> {
    if data.is_empty() {
        return Cow::Borrowed(template);
    }

    PLACEHOLDER.replace_all(template, |caps: &Captures| {
        let name = caps
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map(|name| name.as_str().trim())
            .unwrap_or_default();

        match path::find_in(data, name).found() {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => format_number(n),
            _ => caps[0].to_owned(),
        }
    })
}

/// Integral floats print without a fraction, `2.0` reads as `2`
fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
