//! Typed member access over one JSON object fragment.
//!
//! Every modeled member is optional on the wire. `Reader` resolves a member
//! to its typed value or documented default. Off-type members never fail a
//! decode: they are coerced or defaulted. The only shape error is a node
//! that must be an object and is not.

use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Reader for decoding one object node.
///
/// Wraps an object and its location in the document. JSON `null` is
/// treated exactly like a missing member.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    value: &'a Value,
    object: &'a Map<String, Value>,
    path: String,
    depth: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader for the node at `path`; fails if it is not an object.
    pub fn new(value: &'a Value, path: String, depth: usize) -> Result<Self, DecodeError> {
        match value {
            Value::Object(object) => Ok(Self {
                value,
                object,
                path,
                depth,
            }),
            _ => Err(DecodeError::ExpectedObject { path }),
        }
    }

    /// Creates a reader for a document root.
    pub fn root(value: &'a Value) -> Result<Self, DecodeError> {
        Self::new(value, String::new(), 0)
    }

    /// The whole node, as passed in.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Path of this node.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Sub-entity nesting depth of this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Path of a member of this node.
    pub fn member_path(&self, key: &str) -> String {
        format!("{}/{}", self.path, key)
    }

    /// Returns a member, or `None` if missing or `null`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match self.object.get(key) {
            None | Some(Value::Null) => None,
            Some(v) => Some(v),
        }
    }

    /// Reads a string member.
    ///
    /// Falsy values (missing, `null`, `false`, zero, `""`) give `default`.
    /// Other non-string values are kept as their compact JSON text, so a
    /// truthy member stays truthy when the node is encoded again.
    pub fn read_string(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(value) if truthy(value) => text(value),
            _ => default.to_string(),
        }
    }

    /// Reads an array-of-strings member. Missing gives an empty list.
    ///
    /// A lone string is read as a one-element list; any other non-array
    /// value as an empty list. `null` elements are skipped and other
    /// non-string elements are kept as compact JSON text.
    pub fn read_strings(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter(|item| !item.is_null())
                .map(text)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Reads an array member. Missing or non-array gives an empty slice.
    pub fn read_array(&self, key: &str) -> &'a [Value] {
        match self.get(key) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    /// Reads an object member. Missing or non-object gives an empty map.
    pub fn read_object(&self, key: &str) -> Map<String, Value> {
        match self.get(key) {
            Some(Value::Object(object)) => object.clone(),
            _ => Map::new(),
        }
    }

    /// Opens a reader on each element of an array-of-objects member.
    pub fn read_children(&self, key: &str, depth: usize) -> Result<Vec<Reader<'a>>, DecodeError> {
        let base = self.member_path(key);
        self.read_array(key)
            .iter()
            .enumerate()
            .map(|(i, item)| Reader::new(item, format!("{base}/{i}"), depth))
            .collect()
    }
}

/// Strings verbatim, anything else as compact JSON.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, zero and `""` are falsy; everything else, including
/// empty arrays and objects, is truthy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
