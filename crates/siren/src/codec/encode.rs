//! Encoding typed Siren trees back into canonical JSON documents.
//!
//! Output is a pure function of a node's current typed members (never of
//! its raw snapshot). Optional members equal to their empty value are
//! omitted; `rel`, `href` and `name` are always written where modeled.

use std::fmt;

use serde_json::{Map, Value};

use crate::codec::reader::truthy;
use crate::model::{Action, Entity, EntityCore, Field, Link, NestedEntity, SubEntity};

/// Encoding protocol shared by every node type.
pub trait Encode {
    /// Encodes the node as a JSON object.
    fn encode(&self) -> Value;
}

fn strings(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

fn put_strings(data: &mut Map<String, Value>, key: &str, items: &[String]) {
    if !items.is_empty() {
        data.insert(key.to_string(), strings(items));
    }
}

fn put_string(data: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        data.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn put_nodes<T: Encode>(data: &mut Map<String, Value>, key: &str, nodes: &[T]) {
    if !nodes.is_empty() {
        data.insert(
            key.to_string(),
            Value::Array(nodes.iter().map(Encode::encode).collect()),
        );
    }
}

impl Encode for Link {
    fn encode(&self) -> Value {
        let mut data = Map::new();
        data.insert("rel".into(), self.rel.to_json());
        data.insert("href".into(), Value::String(self.href.clone()));
        put_strings(&mut data, "class", &self.class);
        put_string(&mut data, "type", &self.media_type);
        put_string(&mut data, "title", &self.title);
        Value::Object(data)
    }
}

impl Encode for Field {
    fn encode(&self) -> Value {
        let mut data = Map::new();
        data.insert("name".into(), Value::String(self.name.clone()));
        put_strings(&mut data, "class", &self.class);
        put_string(&mut data, "title", &self.title);
        put_string(&mut data, "type", &self.input_type);
        if truthy(&self.value) {
            data.insert("value".into(), self.value.clone());
        }
        Value::Object(data)
    }
}

impl Encode for Action {
    fn encode(&self) -> Value {
        let mut data = Map::new();
        data.insert("name".into(), Value::String(self.name.clone()));
        data.insert("href".into(), Value::String(self.href.clone()));
        put_strings(&mut data, "class", &self.class);
        put_string(&mut data, "method", &self.method);
        put_string(&mut data, "title", &self.title);
        put_string(&mut data, "type", &self.media_type);
        put_nodes(&mut data, "fields", &self.fields);
        Value::Object(data)
    }
}

fn encode_core(core: &EntityCore) -> Map<String, Value> {
    let mut data = Map::new();
    put_nodes(&mut data, "actions", &core.actions);
    put_strings(&mut data, "class", &core.class);
    put_nodes(&mut data, "links", &core.links);
    put_nodes(&mut data, "entities", &core.entities);
    if !core.properties.is_empty() {
        data.insert("properties".into(), Value::Object(core.properties.clone()));
    }
    put_string(&mut data, "title", &core.title);
    data
}

impl Encode for NestedEntity {
    fn encode(&self) -> Value {
        let mut data = encode_core(&self.core);
        data.insert("rel".into(), self.rel.to_json());
        Value::Object(data)
    }
}

impl Encode for SubEntity {
    fn encode(&self) -> Value {
        match self {
            SubEntity::Link(link) => link.encode(),
            SubEntity::Entity(entity) => entity.encode(),
        }
    }
}

impl Encode for Entity {
    fn encode(&self) -> Value {
        Value::Object(encode_core(&self.core))
    }
}

/// Encodes a root entity.
pub fn encode_entity(entity: &Entity) -> Value {
    entity.encode()
}

/// Encodes a root entity as compact JSON text.
pub fn encode_entity_string(entity: &Entity) -> String {
    entity.encode().to_string()
}

// Display renders the compact encoded form.

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Display for NestedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Display for SubEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
