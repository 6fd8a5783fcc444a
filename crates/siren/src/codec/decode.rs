//! Decoding JSON documents into typed Siren trees.
//!
//! Missing members take their documented defaults and off-type members are
//! coerced or defaulted. Only invalid JSON, a non-object where a node is
//! expected, or nesting past the depth limit fail to decode. Rule violations
//! such as a missing `rel` are left for [`crate::validate`].

use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::reader::{Reader, truthy};
use crate::error::DecodeError;
use crate::limits::MAX_DEPTH;
use crate::model::{
    Action, DEFAULT_ACTION_TYPE, DEFAULT_FIELD_TYPE, DEFAULT_METHOD, Entity, EntityCore, Field,
    Link, NestedEntity, Rel, SubEntity,
};
use crate::validate::Ledger;

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum sub-entity nesting depth. The root is depth 0.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Creates default decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum sub-entity nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Decodes a root entity with default options.
pub fn decode_entity(value: &Value) -> Result<Entity, DecodeError> {
    decode_entity_with_options(value, DecodeOptions::default())
}

/// Decodes a root entity with the given options.
pub fn decode_entity_with_options(
    value: &Value,
    options: DecodeOptions,
) -> Result<Entity, DecodeError> {
    let reader = Reader::root(value)?;
    let core = read_core(&reader, &options)?;

    debug!(
        actions = core.actions.len(),
        links = core.links.len(),
        entities = core.entities.len(),
        "decoded siren entity"
    );

    Ok(Entity {
        core,
        raw: value.clone(),
        errors: Ledger::new(),
    })
}

/// Parses JSON text and decodes a root entity.
pub fn decode_entity_str(text: &str) -> Result<Entity, DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    decode_entity(&value)
}

/// Parses JSON bytes and decodes a root entity.
pub fn decode_entity_slice(bytes: &[u8]) -> Result<Entity, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode_entity(&value)
}

/// Decodes a sub-entity fragment with default options.
pub fn decode_nested_entity(value: &Value) -> Result<NestedEntity, DecodeError> {
    read_nested(&Reader::root(value)?, &DecodeOptions::default())
}

/// Decodes a link fragment.
pub fn decode_link(value: &Value) -> Result<Link, DecodeError> {
    Ok(read_link(&Reader::root(value)?))
}

/// Decodes an action fragment.
pub fn decode_action(value: &Value) -> Result<Action, DecodeError> {
    read_action(&Reader::root(value)?)
}

/// Decodes a field fragment.
pub fn decode_field(value: &Value) -> Result<Field, DecodeError> {
    Ok(read_field(&Reader::root(value)?))
}

// =============================================================================
// NODES
// =============================================================================

fn read_link(reader: &Reader<'_>) -> Link {
    Link {
        rel: Rel::from_json(reader.get("rel")),
        href: reader.read_string("href", ""),
        class: reader.read_strings("class"),
        media_type: reader.read_string("type", ""),
        title: reader.read_string("title", ""),
        raw: reader.value().clone(),
        errors: Ledger::new(),
    }
}

fn read_field(reader: &Reader<'_>) -> Field {
    let value = match reader.get("value") {
        Some(v) if truthy(v) => v.clone(),
        _ => Value::String(String::new()),
    };

    Field {
        name: reader.read_string("name", ""),
        class: reader.read_strings("class"),
        title: reader.read_string("title", ""),
        input_type: reader.read_string("type", DEFAULT_FIELD_TYPE),
        value,
        options: reader.read_array("options").to_vec(),
        raw: reader.value().clone(),
        errors: Ledger::new(),
    }
}

fn read_action(reader: &Reader<'_>) -> Result<Action, DecodeError> {
    let fields = reader
        .read_children("fields", reader.depth())?
        .iter()
        .map(read_field)
        .collect();

    Ok(Action {
        name: reader.read_string("name", ""),
        href: reader.read_string("href", ""),
        class: reader.read_strings("class"),
        method: reader.read_string("method", DEFAULT_METHOD),
        title: reader.read_string("title", ""),
        media_type: reader.read_string("type", DEFAULT_ACTION_TYPE),
        fields,
        raw: reader.value().clone(),
        errors: Ledger::new(),
    })
}

fn read_nested(reader: &Reader<'_>, options: &DecodeOptions) -> Result<NestedEntity, DecodeError> {
    Ok(NestedEntity {
        rel: Rel::from_json(reader.get("rel")),
        core: read_core(reader, options)?,
        raw: reader.value().clone(),
        errors: Ledger::new(),
    })
}

/// Decodes one member of an `entities` sequence.
///
/// A member with a truthy `href` is an embedded link; anything else is an
/// embedded entity.
fn read_sub_entity(reader: &Reader<'_>, options: &DecodeOptions) -> Result<SubEntity, DecodeError> {
    if reader.get("href").is_some_and(truthy) {
        trace!(path = reader.path(), "sub-entity classified as link");
        return Ok(SubEntity::Link(read_link(reader)));
    }

    if reader.depth() > options.max_depth {
        return Err(DecodeError::DepthExceeded {
            path: reader.path().to_string(),
            max: options.max_depth,
        });
    }

    trace!(path = reader.path(), "sub-entity classified as entity");
    Ok(SubEntity::Entity(read_nested(reader, options)?))
}

fn read_core(reader: &Reader<'_>, options: &DecodeOptions) -> Result<EntityCore, DecodeError> {
    let depth = reader.depth();

    let actions = reader
        .read_children("actions", depth)?
        .iter()
        .map(read_action)
        .collect::<Result<Vec<_>, _>>()?;

    let links = reader
        .read_children("links", depth)?
        .iter()
        .map(read_link)
        .collect();

    let entities = reader
        .read_children("entities", depth + 1)?
        .iter()
        .map(|child| read_sub_entity(child, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EntityCore {
        actions,
        class: reader.read_strings("class"),
        links,
        properties: reader.read_object("properties"),
        title: reader.read_string("title", ""),
        entities,
    })
}
