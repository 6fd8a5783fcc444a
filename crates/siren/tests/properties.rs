//! Property tests over generated documents.

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use siren::{Encode, SubEntity, Validate, decode_entity, decode_link};

fn rel_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..4)
}

fn optional_string(key: &'static str) -> impl Strategy<Value = Option<(&'static str, String)>> {
    prop::option::of("[a-zA-Z/ ]{1,12}").prop_map(move |s| s.map(|s| (key, s)))
}

/// A well-formed link document with a random subset of optional members.
fn link_doc() -> impl Strategy<Value = Value> {
    (
        rel_strategy(),
        "/[a-z]{0,10}",
        prop::collection::vec("[a-z]{1,6}", 0..3),
        optional_string("type"),
        optional_string("title"),
    )
        .prop_map(|(rel, href, class, media_type, title)| {
            let mut doc = Map::new();
            doc.insert("rel".into(), json!(rel));
            doc.insert("href".into(), json!(href));
            if !class.is_empty() {
                doc.insert("class".into(), json!(class));
            }
            for (key, value) in [media_type, title].into_iter().flatten() {
                doc.insert(key.into(), json!(value));
            }
            Value::Object(doc)
        })
}

/// Any truthy `href`, not only strings.
fn truthy_href() -> impl Strategy<Value = Value> {
    prop_oneof![
        "/[a-z]{1,8}".prop_map(Value::from),
        (1..i64::MAX).prop_map(Value::from),
        Just(json!(true)),
        Just(json!({})),
        "[a-z]{1,4}".prop_map(|key| Value::Object(Map::from_iter([(key, json!(1))]))),
        Just(json!([])),
    ]
}

/// A sub-entity member: an embedded link or a small embedded entity, with
/// arbitrary extra members.
fn sub_entity_doc() -> impl Strategy<Value = (bool, Value)> {
    (
        any::<bool>(),
        truthy_href(),
        rel_strategy(),
        prop::option::of("[a-z]{1,6}"),
        prop::option::of(any::<i64>()),
    )
        .prop_map(|(is_link, href, rel, title, extra)| {
            let mut doc = Map::new();
            doc.insert("rel".into(), json!(rel));
            if is_link {
                doc.insert("href".into(), href);
            }
            if let Some(title) = title {
                doc.insert("title".into(), json!(title));
            }
            if let Some(extra) = extra {
                doc.insert("properties".into(), json!({"n": extra}));
                doc.insert("links".into(), json!([{"rel": ["self"], "href": "/s"}]));
            }
            (is_link, Value::Object(doc))
        })
}

proptest! {
    #[test]
    fn link_roundtrip(doc in link_doc()) {
        let link = decode_link(&doc).unwrap();
        prop_assert_eq!(link.encode(), doc);
    }

    #[test]
    fn discriminator_follows_href(members in prop::collection::vec(sub_entity_doc(), 0..6)) {
        let expected: Vec<bool> = members.iter().map(|(is_link, _)| *is_link).collect();
        let docs: Vec<Value> = members.into_iter().map(|(_, doc)| doc).collect();
        let entity = decode_entity(&json!({"entities": docs})).unwrap();

        let actual: Vec<bool> = entity.core.entities.iter().map(SubEntity::is_link).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn entity_lookup_never_returns_links(
        members in prop::collection::vec(sub_entity_doc(), 0..6),
        query in "[a-z]{1,8}",
    ) {
        let docs: Vec<Value> = members.into_iter().map(|(_, doc)| doc).collect();
        let entity = decode_entity(&json!({"entities": docs})).unwrap();

        let expected = entity
            .core
            .entities
            .iter()
            .find_map(|sub| sub.as_entity().filter(|e| e.rel.contains(&query)));
        prop_assert_eq!(entity.entity(&query), expected);
    }

    #[test]
    fn validate_is_idempotent(
        members in prop::collection::vec(sub_entity_doc(), 0..4),
        drop_rel in any::<bool>(),
    ) {
        let mut docs: Vec<Value> = members.into_iter().map(|(_, doc)| doc).collect();
        if drop_rel {
            for doc in &mut docs {
                doc.as_object_mut().unwrap().remove("rel");
            }
        }
        let mut entity = decode_entity(&json!({
            "entities": docs,
            "actions": [{"name": "a", "fields": [{"title": "unnamed"}]}]
        }))
        .unwrap();

        let first_valid = entity.validate();
        let first = siren::collect_issues(&entity);
        let second_valid = entity.validate();
        let second = siren::collect_issues(&entity);

        prop_assert!(!first_valid);
        prop_assert_eq!(first_valid, second_valid);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn encode_is_stable(members in prop::collection::vec(sub_entity_doc(), 0..4)) {
        let docs: Vec<Value> = members.into_iter().map(|(_, doc)| doc).collect();
        let entity = decode_entity(&json!({"entities": docs})).unwrap();

        let once = entity.encode();
        let again = decode_entity(&once).unwrap().encode();
        prop_assert_eq!(once, again);
    }
}
