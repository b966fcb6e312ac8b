//! Display formatting of raw registry values.

use super::UNKNOWN;
use serde_json::Value;

/// Returns the value as trimmed text, `None` for null, empty or structured values.
pub fn value_text(value: Option<&Value>) -> Option<String> {
	let text = match value? {
		Value::String(s) => s.trim().to_string(),
		Value::Number(n) => n.to_string(),
		Value::Bool(b) => b.to_string(),
		Value::Null | Value::Array(_) | Value::Object(_) => return None,
	};
	(!text.is_empty()).then_some(text)
}

fn is_placeholder(text: &str) -> bool {
	matches!(text, "-" | "—")
}

/// Formats a number as an integer with space-separated thousands and an optional
/// unit, e.g. `1234567.8` → `"1 234 567 руб."`. Text that does not parse as a number
/// (`"12,5"` included) is returned as it is; a missing value becomes [`UNKNOWN`].
pub fn format_number(value: Option<&Value>, suffix: &str) -> String {
	let Some(text) = value_text(value).filter(|t| !is_placeholder(t)) else {
		return UNKNOWN.to_string();
	};
	let Ok(number) = text.parse::<f64>() else {
		return text;
	};
	if !number.is_finite() {
		return text;
	}

	let digits = format!("{}", number.trunc().abs() as u64);
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
	if number <= -1.0 {
		grouped.push('-');
	}
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(' ');
		}
		grouped.push(c);
	}

	if suffix.is_empty() {
		grouped
	} else {
		format!("{grouped} {suffix}")
	}
}

/// Rewrites an ISO date `YYYY-MM-DD` as `DD.MM.YYYY`. Anything else is returned
/// as it is; a missing value becomes [`UNKNOWN`].
pub fn format_date(value: Option<&Value>) -> String {
	let Some(text) = value_text(value) else {
		return UNKNOWN.to_string();
	};
	let parts: Vec<&str> = text.split('-').collect();
	match parts.as_slice() {
		[year, month, day] => format!("{day}.{month}.{year}"),
		_ => text,
	}
}

/// False for null, `false`, zero, and empty strings, arrays or objects.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(a) => !a.is_empty(),
		Value::Object(o) => !o.is_empty(),
	}
}

/// Returns the trimmed text of `value`, or [`UNKNOWN`].
pub fn text_or_unknown(value: Option<&Value>) -> String {
	value_text(value).unwrap_or_else(|| UNKNOWN.to_string())
}
