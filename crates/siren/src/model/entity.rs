//! Entities, sub-entities and the shape they share.

use serde_json::{Map, Value};

use crate::codec::Encode;
use crate::model::{Action, Link, Rel};
use crate::validate::Ledger;

/// Members shared by root entities and sub-entities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityCore {
    /// Available behaviors, in document order.
    pub actions: Vec<Action>,
    /// Class labels.
    pub class: Vec<String>,
    /// Navigational links, in document order.
    pub links: Vec<Link>,
    /// Opaque key/value properties, in document order.
    pub properties: Map<String, Value>,
    /// Human-readable title.
    pub title: String,
    /// Sub-entities: embedded entities and embedded links, in document order.
    pub entities: Vec<SubEntity>,
}

impl EntityCore {
    /// Returns the first action with the given name.
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// Mutable variant of [`EntityCore::action`].
    pub fn action_mut(&mut self, name: &str) -> Option<&mut Action> {
        self.actions.iter_mut().find(|a| a.name == name)
    }

    /// Returns the first embedded entity whose `rel` contains `rel`.
    ///
    /// Embedded links are never matched.
    pub fn entity(&self, rel: &str) -> Option<&NestedEntity> {
        self.entities.iter().find_map(|sub| match sub {
            SubEntity::Entity(e) if e.rel.contains(rel) => Some(e),
            _ => None,
        })
    }

    /// Returns the first entry of `links` whose `rel` contains `rel`.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel.contains(rel))
    }

    /// Returns the first embedded link whose `rel` contains `rel`.
    pub fn embedded_link(&self, rel: &str) -> Option<&Link> {
        self.entities.iter().find_map(|sub| match sub {
            SubEntity::Link(l) if l.rel.contains(rel) => Some(l),
            _ => None,
        })
    }
}

/// A member of an entity's `entities` sequence.
///
/// The wire format has no tag: a member with an `href` is an embedded link,
/// anything else is an embedded entity.
#[derive(Debug, Clone, PartialEq)]
pub enum SubEntity {
    /// An embedded link: the member had a truthy `href`.
    Link(Link),
    /// A fully embedded sub-entity.
    Entity(NestedEntity),
}

impl SubEntity {
    /// Relation types of either variant.
    pub fn rel(&self) -> &Rel {
        match self {
            SubEntity::Link(l) => &l.rel,
            SubEntity::Entity(e) => &e.rel,
        }
    }

    /// Returns the embedded link, if this is one.
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            SubEntity::Link(l) => Some(l),
            SubEntity::Entity(_) => None,
        }
    }

    /// Returns the embedded entity, if this is one.
    pub fn as_entity(&self) -> Option<&NestedEntity> {
        match self {
            SubEntity::Entity(e) => Some(e),
            SubEntity::Link(_) => None,
        }
    }

    /// Whether this member was classified as an embedded link.
    pub fn is_link(&self) -> bool {
        matches!(self, SubEntity::Link(_))
    }

    /// The document fragment this node was built from.
    pub fn raw(&self) -> &Value {
        match self {
            SubEntity::Link(l) => l.raw(),
            SubEntity::Entity(e) => e.raw(),
        }
    }
}

impl From<Link> for SubEntity {
    fn from(link: Link) -> Self {
        SubEntity::Link(link)
    }
}

impl From<NestedEntity> for SubEntity {
    fn from(entity: NestedEntity) -> Self {
        SubEntity::Entity(entity)
    }
}

/// The root resource of a Siren document.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Actions, class, links, sub-entities, properties and title.
    pub core: EntityCore,
    pub(crate) raw: Value,
    pub(crate) errors: Ledger,
}

/// An entity embedded in a parent, tagged with its relation to the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedEntity {
    /// Relation to the parent. Required, non-empty.
    pub rel: Rel,
    /// Members shared with a root entity.
    pub core: EntityCore,
    pub(crate) raw: Value,
    pub(crate) errors: Ledger,
}

impl Entity {
    /// Creates an entity from its members.
    pub fn new(core: EntityCore) -> Self {
        let mut entity = Self {
            core,
            raw: Value::Null,
            errors: Ledger::new(),
        };
        entity.raw = entity.encode();
        entity
    }

    /// The document this entity was built from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Returns the first action with the given name.
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.core.action(name)
    }

    /// Returns the first embedded entity whose `rel` contains `rel`.
    pub fn entity(&self, rel: &str) -> Option<&NestedEntity> {
        self.core.entity(rel)
    }

    /// Returns the first link whose `rel` contains `rel`.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.core.link(rel)
    }
}

impl NestedEntity {
    /// Creates a sub-entity from its relation and members.
    pub fn new(rel: Rel, core: EntityCore) -> Self {
        let mut entity = Self {
            rel,
            core,
            raw: Value::Null,
            errors: Ledger::new(),
        };
        entity.raw = entity.encode();
        entity
    }

    /// The document fragment this sub-entity was built from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Returns the first action with the given name.
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.core.action(name)
    }

    /// Returns the first embedded entity whose `rel` contains `rel`.
    pub fn entity(&self, rel: &str) -> Option<&NestedEntity> {
        self.core.entity(rel)
    }

    /// Returns the first link whose `rel` contains `rel`.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.core.link(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_with_subs() -> EntityCore {
        EntityCore {
            entities: vec![
                Link::new(Rel::new(["item"]), "/items/1").into(),
                NestedEntity::new(Rel::new(["author"]), EntityCore::default()).into(),
                NestedEntity::new(Rel::new(["item", "featured"]), EntityCore::default()).into(),
            ],
            links: vec![
                Link::new(Rel::new(["self"]), "/orders/1"),
                Link::new(Rel::new(["next", "self"]), "/orders/2"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_entity_skips_links() {
        let core = core_with_subs();
        let found = core.entity("item").unwrap();
        assert!(found.rel.contains("featured"));
        assert!(core.entity("missing").is_none());
    }

    #[test]
    fn test_embedded_link_lookup() {
        let core = core_with_subs();
        assert_eq!(core.embedded_link("item").unwrap().href, "/items/1");
        assert!(core.embedded_link("author").is_none());
    }

    #[test]
    fn test_link_first_match() {
        let core = core_with_subs();
        assert_eq!(core.link("self").unwrap().href, "/orders/1");
        assert_eq!(core.link("next").unwrap().href, "/orders/2");
        assert!(core.link("prev").is_none());
    }

    #[test]
    fn test_action_lookup() {
        let mut core = EntityCore::default();
        core.actions.push(Action::new("add", "/items"));
        core.actions.push(Action::new("add", "/other"));
        let entity = Entity::new(core);
        assert_eq!(entity.action("add").unwrap().href, "/items");
        assert!(entity.action("remove").is_none());
    }

    #[test]
    fn test_subentity_accessors() {
        let core = core_with_subs();
        assert!(core.entities[0].is_link());
        assert!(core.entities[0].as_entity().is_none());
        assert!(core.entities[1].as_link().is_none());
        assert!(core.entities[1].rel().contains("author"));
    }
}
