//! Navigational links.

use serde_json::Value;

use crate::codec::Encode;
use crate::model::Rel;
use crate::validate::Ledger;

/// A navigational transition to another resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Relation types of the link. Required, non-empty.
    pub rel: Rel,
    /// Target URI. Defaults to `""`.
    pub href: String,
    /// Class labels. Defaults to empty.
    pub class: Vec<String>,
    /// Media type of the target (`type` on the wire). Defaults to `""`.
    pub media_type: String,
    /// Human-readable title. Defaults to `""`.
    pub title: String,
    pub(crate) raw: Value,
    pub(crate) errors: Ledger,
}

impl Link {
    /// Creates a link with the given relations and target.
    pub fn new(rel: Rel, href: impl Into<String>) -> Self {
        let mut link = Self {
            rel,
            href: href.into(),
            class: Vec::new(),
            media_type: String::new(),
            title: String::new(),
            raw: Value::Null,
            errors: Ledger::new(),
        };
        link.raw = link.encode();
        link
    }

    /// The document fragment this link was built from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
