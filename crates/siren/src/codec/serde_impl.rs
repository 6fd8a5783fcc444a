//! serde integration for root entities.
//!
//! Serializing writes the encoded document; deserializing goes through
//! [`decode_entity`] so defaults and the sub-entity discriminator apply.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::codec::{Encode, decode_entity};
use crate::model::Entity;

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Entity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_entity(&value).map_err(de::Error::custom)
    }
}
