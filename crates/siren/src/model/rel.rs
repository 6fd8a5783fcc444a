//! Relation types carried by links and sub-entities.

use serde_json::Value;

/// The `rel` member of a [`Link`](crate::Link) or
/// [`NestedEntity`](crate::NestedEntity).
///
/// A well-formed document always carries a non-empty array of strings here,
/// but decoding never rejects a bad `rel`: absence and wrong shapes are kept
/// so that validation can report them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Rel {
    /// The member was missing (or `null`).
    #[default]
    Absent,
    /// An array of relation strings, in document order.
    Values(Vec<String>),
    /// Any other JSON value, kept verbatim.
    Malformed(Value),
}

impl Rel {
    /// Creates a `Rel` from relation strings.
    pub fn new<I, S>(rels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rel::Values(rels.into_iter().map(Into::into).collect())
    }

    /// Classifies a JSON member. `None` and `null` are absent.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Rel::Absent,
            Some(Value::Array(items)) => {
                let strings: Option<Vec<String>> = items
                    .iter()
                    .map(|v| v.as_str().map(str::to_owned))
                    .collect();
                match strings {
                    Some(rels) => Rel::Values(rels),
                    None => Rel::Malformed(Value::Array(items.clone())),
                }
            }
            Some(other) => Rel::Malformed(other.clone()),
        }
    }

    /// Returns the relation strings, or an empty slice when absent or malformed.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Rel::Values(rels) => rels,
            Rel::Absent | Rel::Malformed(_) => &[],
        }
    }

    /// Returns true if `rel` is one of the relation strings.
    pub fn contains(&self, rel: &str) -> bool {
        self.as_slice().iter().any(|r| r == rel)
    }

    /// Returns true if the member was missing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Rel::Absent)
    }

    /// Returns true for a non-empty array of strings.
    pub fn is_valid(&self) -> bool {
        matches!(self, Rel::Values(rels) if !rels.is_empty())
    }

    /// Encodes back to JSON. Absent encodes as an empty array.
    pub fn to_json(&self) -> Value {
        match self {
            Rel::Absent => Value::Array(Vec::new()),
            Rel::Values(rels) => Value::Array(rels.iter().cloned().map(Value::String).collect()),
            Rel::Malformed(value) => value.clone(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Rel {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Rel::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json_shapes() {
        assert_eq!(Rel::from_json(None), Rel::Absent);
        assert_eq!(Rel::from_json(Some(&Value::Null)), Rel::Absent);
        assert_eq!(Rel::from_json(Some(&json!(["self"]))), Rel::new(["self"]));
        assert_eq!(Rel::from_json(Some(&json!([]))), Rel::Values(vec![]));
        assert_eq!(
            Rel::from_json(Some(&json!("self"))),
            Rel::Malformed(json!("self"))
        );
        assert_eq!(
            Rel::from_json(Some(&json!(["self", 3]))),
            Rel::Malformed(json!(["self", 3]))
        );
    }

    #[test]
    fn test_validity() {
        assert!(Rel::new(["item"]).is_valid());
        assert!(!Rel::Values(vec![]).is_valid());
        assert!(!Rel::Absent.is_valid());
        assert!(!Rel::Malformed(json!(1)).is_valid());
    }

    #[test]
    fn test_contains() {
        let rel = Rel::new(["item", "collection"]);
        assert!(rel.contains("collection"));
        assert!(!rel.contains("self"));
        assert!(!Rel::Malformed(json!("item")).contains("item"));
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Rel::Absent.to_json(), json!([]));
        assert_eq!(Rel::new(["a", "b"]).to_json(), json!(["a", "b"]));
        assert_eq!(Rel::Malformed(json!({"x": 1})).to_json(), json!({"x": 1}));
    }
}
