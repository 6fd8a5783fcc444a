//! Canonical bytes and content fingerprints.
//!
//! Encoding preserves member order, which is right for round-trips but not
//! for comparing documents. The canonical form sorts object keys at every
//! level so two documents with the same content have the same bytes.
//!
//! ```text
//! fingerprint = SHA-256(canonical_bytes(encode(entity)))
//! ```

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::codec::Encode;
use crate::model::Entity;

/// A SHA-256 content fingerprint.
pub type Fingerprint = [u8; 32];

fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut keys: Vec<&String> = object.keys().collect();
            keys.sort();
            let mut out = Map::new();
            for key in keys {
                out.insert(key.clone(), sorted(&object[key.as_str()]));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}

/// Returns compact JSON bytes with object keys sorted recursively.
///
/// Array order is significant and kept.
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    sorted(value).to_string().into_bytes()
}

/// Fingerprints the encoded form of an entity.
///
/// Raw snapshots do not contribute; two entities whose current state
/// encodes to the same content share a fingerprint.
pub fn fingerprint(entity: &Entity) -> Fingerprint {
    let hash = Sha256::digest(canonical_bytes(&entity.encode()));
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    out
}

/// Formats a fingerprint as lowercase hex.
pub fn format_fingerprint(fingerprint: &Fingerprint) -> String {
    fingerprint.iter().map(|b| format!("{b:02x}")).collect()
}
