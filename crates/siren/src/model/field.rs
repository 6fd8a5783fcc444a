//! Action fields.

use serde_json::Value;

use crate::codec::Encode;
use crate::validate::Ledger;

/// Default input type of a field.
pub const DEFAULT_FIELD_TYPE: &str = "text";

/// A single input control belonging to an [`Action`](crate::Action).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name. Required.
    pub name: String,
    /// Class labels. Defaults to empty.
    pub class: Vec<String>,
    /// Human-readable title. Defaults to `""`.
    pub title: String,
    /// Input type (`type` on the wire). Defaults to `"text"`.
    pub input_type: String,
    /// Current value, opaque JSON. Defaults to `""`.
    pub value: Value,
    /// Choices for select-like inputs. Not part of the Siren format: read on
    /// decode, never validated, never encoded.
    pub options: Vec<Value>,
    pub(crate) raw: Value,
    pub(crate) errors: Ledger,
}

impl Field {
    /// Creates a text field with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let mut field = Self {
            name: name.into(),
            class: Vec::new(),
            title: String::new(),
            input_type: DEFAULT_FIELD_TYPE.to_string(),
            value: Value::String(String::new()),
            options: Vec::new(),
            raw: Value::Null,
            errors: Ledger::new(),
        };
        field.raw = field.encode();
        field
    }

    /// The document fragment this field was built from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The value as form text: strings verbatim, `null` as empty,
    /// everything else as compact JSON.
    pub fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_value_text() {
        let mut field = Field::new("qty");
        assert_eq!(field.value_text(), "");

        field.value = json!(3);
        assert_eq!(field.value_text(), "3");

        field.value = json!("three");
        assert_eq!(field.value_text(), "three");

        field.value = json!(["a"]);
        assert_eq!(field.value_text(), r#"["a"]"#);
    }
}
