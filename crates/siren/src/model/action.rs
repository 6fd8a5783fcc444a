//! Actions: behaviors an entity exposes.

use serde_json::Value;

use crate::codec::Encode;
use crate::model::Field;
use crate::validate::Ledger;

/// Default HTTP method of an action.
pub const DEFAULT_METHOD: &str = "GET";

/// Default encoding type of an action's fields.
pub const DEFAULT_ACTION_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// A named, invocable operation with a target and ordered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Action name, unique within an entity. Required.
    pub name: String,
    /// Target URI. Required.
    pub href: String,
    /// Class labels. Defaults to empty.
    pub class: Vec<String>,
    /// HTTP method. Defaults to `"GET"`.
    pub method: String,
    /// Human-readable title. Defaults to `""`.
    pub title: String,
    /// Encoding type for the fields (`type` on the wire).
    pub media_type: String,
    /// Input controls, in document order.
    pub fields: Vec<Field>,
    pub(crate) raw: Value,
    pub(crate) errors: Ledger,
}

impl Action {
    /// Creates an action with default method and encoding type.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        let mut action = Self {
            name: name.into(),
            href: href.into(),
            class: Vec::new(),
            method: DEFAULT_METHOD.to_string(),
            title: String::new(),
            media_type: DEFAULT_ACTION_TYPE.to_string(),
            fields: Vec::new(),
            raw: Value::Null,
            errors: Ledger::new(),
        };
        action.raw = action.encode();
        action
    }

    /// The document fragment this action was built from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Returns the first field with the given name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Mutable variant of [`Action::field`].
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}
