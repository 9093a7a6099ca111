// Field coercion for loosely-typed source records
//
// Chain exports mix numbers and numeric strings for the same field, so every
// value is read as a `serde_json::Value` and narrowed here.

use crate::error::RecordError;
use crate::models::OrderCount;
use serde_json::Value;

/// Reads a required coordinate. Accepts JSON numbers and numeric strings;
/// anything that is absent, empty or not a finite number is rejected.
pub fn coordinate(value: Option<&Value>, field: &'static str) -> Result<f64, RecordError> {
    let parsed = match value {
        None | Some(Value::Null) => return Err(RecordError::MissingField(field)),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(RecordError::MissingField(field))
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(RecordError::InvalidNumber {
            field,
            value: value.map(Value::to_string).unwrap_or_default(),
        }),
    }
}

/// Reads an order counter, falling back to 0 when the value is missing,
/// non-numeric or negative. Fractional values are truncated.
pub fn order_count(value: Option<&Value>) -> OrderCount {
    let as_float = match value {
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_u64() {
                return v;
            }
            n.as_f64()
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            if let Ok(v) = s.parse::<u64>() {
                return v;
            }
            s.parse::<f64>().ok()
        }
        _ => None,
    };

    match as_float {
        Some(v) if v.is_finite() && v >= 0.0 => v.trunc() as OrderCount,
        _ => 0,
    }
}

/// Reads a free-text field; missing values become an empty string
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
