//! Siren: typed model for Siren hypermedia documents.
//!
//! This crate provides decoding, validation and encoding for documents in
//! the Siren hypermedia format.
//!
//! # Overview
//!
//! A Siren document is a tree:
//! - an **entity** carries properties, class labels, a title, actions,
//!   links and sub-entities
//! - a **sub-entity** is either an embedded link or an embedded entity,
//!   distinguished only by the presence of `href`
//! - an **action** is a named operation with a target and ordered fields
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use siren::{Encode, Validate, decode_entity};
//!
//! let doc = json!({
//!     "actions": [{"name": "add", "href": "/items", "fields": [{"name": "qty"}]}],
//!     "entities": [{"rel": ["item"], "href": "/items/1"}]
//! });
//!
//! let mut entity = decode_entity(&doc).unwrap();
//!
//! let add = entity.action("add").unwrap();
//! assert_eq!(add.method, "GET");
//! assert_eq!(add.field("qty").unwrap().input_type, "text");
//!
//! // The only sub-entity has an `href`, so it is an embedded link.
//! assert!(entity.entity("item").is_none());
//!
//! assert!(entity.validate());
//! assert_eq!(entity.encode()["actions"][0]["method"], "GET");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Node types (Entity, NestedEntity, SubEntity, Action, Field, Link)
//! - [`codec`]: JSON decoding/encoding
//! - [`validate`]: Error ledgers and the validation protocol
//! - [`canonical`]: Canonical bytes and fingerprints for diffing
//! - [`submission`]: Request parts for submitting an action
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Errors
//!
//! Decoding fails only when the input is not a usable document (not JSON,
//! a node that is not an object, or nesting past the depth limit). Members
//! of an unexpected JSON type are coerced or defaulted. Breaking the
//! format's rules, such as an empty `rel`, is reported by validation as
//! data in each node's ledger.

pub mod canonical;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod submission;
pub mod validate;

// Re-export commonly used types at crate root
pub use canonical::{Fingerprint, canonical_bytes, fingerprint};
pub use codec::{
    DecodeOptions, Encode, decode_action, decode_entity, decode_entity_slice, decode_entity_str,
    decode_entity_with_options, decode_field, decode_link, decode_nested_entity, encode_entity,
    encode_entity_string,
};
pub use error::{DecodeError, ErrorCode};
pub use model::{
    Action, Entity, EntityBuilder, EntityCore, Field, Link, NestedEntity, Rel, SubEntity,
};
pub use submission::Submission;
pub use validate::{Issue, Ledger, NON_EMPTY_STRINGS, REQUIRED, Validate, collect_issues};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
