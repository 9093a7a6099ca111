// Opaque identifiers carried through from the input files

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier passed through unchecked.
///
/// Sources mix numeric and string ids, so the original JSON value is kept
/// as-is for the JSON report and rendered as plain text for the CSV report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueId(pub Value);

impl OpaqueId {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Whether the source record carried no identifier at all
    pub fn is_missing(&self) -> bool {
        self.0.is_null()
    }
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for OpaqueId {
    fn from(s: &str) -> Self {
        Self(Value::String(s.to_string()))
    }
}

impl From<u64> for OpaqueId {
    fn from(n: u64) -> Self {
        Self(Value::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(OpaqueId::from("L-17").to_string(), "L-17");
        assert_eq!(OpaqueId::from(42u64).to_string(), "42");
        assert_eq!(OpaqueId::default().to_string(), "");
    }

    #[test]
    fn test_json_passthrough() {
        let id = OpaqueId::from(42u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let id = OpaqueId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
