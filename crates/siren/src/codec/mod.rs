//! JSON decoding/encoding for Siren documents.
//!
//! Decoding turns an untyped `serde_json::Value` into a typed tree; encoding
//! writes the tree's current state back out, omitting members that hold
//! their default empty value.

pub mod decode;
pub mod encode;
pub mod reader;
mod serde_impl;

pub use decode::{
    DecodeOptions, decode_action, decode_entity, decode_entity_slice, decode_entity_str,
    decode_entity_with_options, decode_field, decode_link, decode_nested_entity,
};
pub use encode::{Encode, encode_entity, encode_entity_string};
pub use reader::{Reader, truthy};
