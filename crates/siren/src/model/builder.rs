//! Builder API for ergonomic entity construction.
//!
//! Provides a fluent interface for building documents in code, e.g. for
//! server responses or tests. Built nodes snapshot their own encoded form
//! as their raw fragment.
//!
//! # Example
//!
//! ```rust
//! use siren::model::builder::EntityBuilder;
//! use serde_json::json;
//!
//! let order = EntityBuilder::new()
//!     .class("order")
//!     .property("orderNumber", json!(42))
//!     .link(["self"], "/orders/42")
//!     .action("add-item", "/orders/42/items", |a| a
//!         .method("POST")
//!         .field("productCode", |f| f)
//!         .field("quantity", |f| f.input_type("number"))
//!     )
//!     .sub_entity(["customer"], |e| e.property("name", json!("Kevin")))
//!     .build();
//!
//! assert_eq!(order.action("add-item").unwrap().fields.len(), 2);
//! assert!(order.entity("customer").is_some());
//! ```

use serde_json::Value;

use crate::codec::Encode;
use crate::model::{Action, Entity, EntityCore, Field, Link, NestedEntity, Rel, SubEntity};

/// Builder for root entities and the members of sub-entities.
#[derive(Debug, Clone, Default)]
pub struct EntityBuilder {
    core: EntityCore,
}

impl EntityBuilder {
    /// Creates an empty EntityBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class label.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.core.class.push(class.into());
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.core.title = title.into();
        self
    }

    /// Sets a property, replacing any previous value for the key.
    pub fn property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.core.properties.insert(key.into(), value);
        self
    }

    // =========================================================================
    // Links
    // =========================================================================

    /// Adds a link with the given relations and target.
    pub fn link<I, S>(self, rel: I, href: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link_with(rel, href, |l| l)
    }

    /// Adds a link configured by a builder function.
    pub fn link_with<I, S, F>(mut self, rel: I, href: impl Into<String>, f: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(LinkBuilder) -> LinkBuilder,
    {
        let builder = f(LinkBuilder::new(Rel::new(rel), href));
        self.core.links.push(builder.build());
        self
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Adds an action configured by a builder function.
    pub fn action<F>(mut self, name: impl Into<String>, href: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(ActionBuilder) -> ActionBuilder,
    {
        let builder = f(ActionBuilder::new(name, href));
        self.core.actions.push(builder.build());
        self
    }

    // =========================================================================
    // Sub-entities
    // =========================================================================

    /// Adds an embedded entity configured by a builder function.
    pub fn sub_entity<I, S, F>(mut self, rel: I, f: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(EntityBuilder) -> EntityBuilder,
    {
        let nested = f(EntityBuilder::new()).build_nested(Rel::new(rel));
        self.core.entities.push(SubEntity::Entity(nested));
        self
    }

    /// Adds an embedded link.
    pub fn embedded_link<I, S>(mut self, rel: I, href: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core
            .entities
            .push(SubEntity::Link(Link::new(Rel::new(rel), href)));
        self
    }

    /// Builds a root entity.
    pub fn build(self) -> Entity {
        Entity::new(self.core)
    }

    /// Builds a sub-entity with the given relation to its parent.
    pub fn build_nested(self, rel: Rel) -> NestedEntity {
        NestedEntity::new(rel, self.core)
    }
}

/// Builder for links.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    link: Link,
}

impl LinkBuilder {
    /// Creates a LinkBuilder with the required members.
    pub fn new(rel: Rel, href: impl Into<String>) -> Self {
        Self {
            link: Link::new(rel, href),
        }
    }

    /// Adds a class label.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.link.class.push(class.into());
        self
    }

    /// Sets the media type of the target.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.link.media_type = media_type.into();
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.link.title = title.into();
        self
    }

    pub fn build(mut self) -> Link {
        self.link.raw = self.link.encode();
        self.link
    }
}

/// Builder for actions.
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    action: Action,
}

impl ActionBuilder {
    /// Creates an ActionBuilder with the required members.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            action: Action::new(name, href),
        }
    }

    /// Adds a class label.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.action.class.push(class.into());
        self
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.action.method = method.into();
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.action.title = title.into();
        self
    }

    /// Sets the encoding type for the fields.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.action.media_type = media_type.into();
        self
    }

    /// Adds a field configured by a builder function.
    pub fn field<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(FieldBuilder) -> FieldBuilder,
    {
        let builder = f(FieldBuilder::new(name));
        self.action.fields.push(builder.build());
        self
    }

    pub fn build(mut self) -> Action {
        self.action.raw = self.action.encode();
        self.action
    }
}

/// Builder for fields.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Creates a FieldBuilder for a text field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name),
        }
    }

    /// Adds a class label.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.field.class.push(class.into());
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.field.title = title.into();
        self
    }

    /// Sets the input type.
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.field.input_type = input_type.into();
        self
    }

    /// Sets the current value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.field.value = value.into();
        self
    }

    /// Adds a choice to the (non-standard) options list.
    pub fn option(mut self, option: Value) -> Self {
        self.field.options.push(option);
        self
    }

    pub fn build(mut self) -> Field {
        self.field.raw = self.field.encode();
        self.field
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_entity_builder_basic() {
        let entity = EntityBuilder::new()
            .class("order")
            .title("Order 42")
            .property("orderNumber", json!(42))
            .link(["self"], "/orders/42")
            .build();

        assert_eq!(entity.core.class, vec!["order"]);
        assert_eq!(entity.core.title, "Order 42");
        assert_eq!(entity.core.properties["orderNumber"], json!(42));
        assert_eq!(entity.link("self").unwrap().href, "/orders/42");
    }

    #[test]
    fn test_action_builder() {
        let entity = EntityBuilder::new()
            .action("add-item", "/orders/42/items", |a| {
                a.method("POST")
                    .title("Add Item")
                    .field("quantity", |f| f.input_type("number").value(1))
                    .field("size", |f| f.option(json!("S")).option(json!("L")))
            })
            .build();

        let action = entity.action("add-item").unwrap();
        assert_eq!(action.method, "POST");
        assert_eq!(action.fields.len(), 2);
        assert_eq!(action.field("quantity").unwrap().input_type, "number");
        assert_eq!(action.field("quantity").unwrap().value, json!(1));
        assert_eq!(action.field("size").unwrap().options.len(), 2);
    }

    #[test]
    fn test_sub_entities() {
        let entity = EntityBuilder::new()
            .sub_entity(["customer"], |e| e.property("name", json!("Kevin")))
            .embedded_link(["items"], "/orders/42/items")
            .build();

        assert_eq!(entity.core.entities.len(), 2);
        assert!(entity.entity("customer").is_some());
        assert!(entity.entity("items").is_none());
        assert!(entity.core.entities[1].is_link());
    }

    #[test]
    fn test_raw_snapshot_is_encoded_form() {
        let entity = EntityBuilder::new()
            .link_with(["self"], "/x", |l| l.title("Self").media_type("application/json"))
            .build();

        assert_eq!(entity.raw(), &entity.encode());
        assert_eq!(
            entity.core.links[0].raw(),
            &json!({"rel": ["self"], "href": "/x", "type": "application/json", "title": "Self"})
        );
    }
}
