//! Per-node error ledger.

use std::collections::{BTreeMap, BTreeSet};

/// Validation messages of one node, keyed by field name.
///
/// Messages collapse per field: inserting the same message twice keeps one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ledger {
    entries: BTreeMap<&'static str, BTreeSet<&'static str>>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field.
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.entries.entry(field).or_default().insert(message);
    }

    /// Messages recorded for a field.
    pub fn get(&self, field: &str) -> Option<&BTreeSet<&'static str>> {
        self.entries.get(field)
    }

    /// Returns true if `message` was recorded for `field`.
    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.get(field).is_some_and(|messages| messages.contains(message))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates fields and their messages in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &BTreeSet<&'static str>)> {
        self.entries.iter().map(|(field, messages)| (*field, messages))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
