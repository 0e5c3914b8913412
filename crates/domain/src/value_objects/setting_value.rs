//! Setting value normalization.
//!
//! Settings arrive as arbitrary JSON from the extension but are stored as
//! text on the `Setting` node. The conversion is lossy on purpose: a stored
//! `"42"` reads back as the string `"42"`, not the number.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::DomainError;

/// A setting value after normalization to its stored string form.
///
/// Accepted input shapes:
/// - string: stored as is
/// - number: stored as its decimal text
/// - boolean: stored as `"true"` / `"false"`
/// - array or object: stored as compact JSON text
///
/// `null` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingValue(String);

impl SettingValue {
    /// Wrap text that is already in stored form.
    pub fn text(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Normalize a JSON value to its stored string form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for `null`.
    pub fn from_json(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Null => Err(DomainError::validation("Setting value cannot be null")),
            Value::String(s) => Ok(Self(s)),
            Value::Bool(b) => Ok(Self(b.to_string())),
            Value::Number(n) => Ok(Self(n.to_string())),
            compound @ (Value::Array(_) | Value::Object(_)) => Ok(Self(compound.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<Value> for SettingValue {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_kept_verbatim() {
        let v = SettingValue::from_json(json!("dark")).expect("string accepted");
        assert_eq!(v.as_str(), "dark");
    }

    #[test]
    fn scalars_are_stringified() {
        assert_eq!(SettingValue::from_json(json!(42)).expect("int").as_str(), "42");
        assert_eq!(SettingValue::from_json(json!(1.5)).expect("float").as_str(), "1.5");
        assert_eq!(SettingValue::from_json(json!(true)).expect("bool").as_str(), "true");
    }

    #[test]
    fn compound_values_become_json_text() {
        let v = SettingValue::from_json(json!({"size": 14})).expect("object accepted");
        assert_eq!(v.as_str(), r#"{"size":14}"#);

        let v = SettingValue::from_json(json!(["a", 1])).expect("array accepted");
        assert_eq!(v.as_str(), r#"["a",1]"#);
    }

    #[test]
    fn null_is_rejected() {
        assert!(matches!(
            SettingValue::from_json(Value::Null),
            Err(DomainError::Validation(_))
        ));
    }
}
