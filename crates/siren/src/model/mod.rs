//! Data model types for Siren documents.
//!
//! This module contains the typed nodes of a Siren document tree:
//! - Links (navigational transitions)
//! - Fields (action inputs)
//! - Actions (invocable operations)
//! - Entities and sub-entities (the composite nodes)
//! - Builders (ergonomic construction)
//!
//! Every node keeps the fragment it was decoded from, available through
//! `raw()`, next to its public, mutable typed members.

pub mod action;
pub mod builder;
pub mod entity;
pub mod field;
pub mod link;
pub mod rel;

pub use action::{Action, DEFAULT_ACTION_TYPE, DEFAULT_METHOD};
pub use builder::{ActionBuilder, EntityBuilder, FieldBuilder, LinkBuilder};
pub use entity::{Entity, EntityCore, NestedEntity, SubEntity};
pub use field::{DEFAULT_FIELD_TYPE, Field};
pub use link::Link;
pub use rel::Rel;
