//! Structural validation for Siren documents.
//!
//! Decoding accepts any object-shaped document and fills in defaults, so a
//! decoded tree may still break the format's rules (a link without `rel`,
//! an action without `href`, ...). Validation finds these problems and
//! records them in the ledger of the node that owns the offending member.
//!
//! Validation never fails fast: one call walks the whole subtree and
//! reports every violation. Each call starts from an empty ledger, so
//! repeated calls on an unchanged tree give the same result.

mod ledger;

pub use ledger::Ledger;

use tracing::debug;

use crate::model::{Action, Entity, EntityCore, Field, Link, NestedEntity, Rel, SubEntity};

/// Message for a missing required member.
pub const REQUIRED: &str = "Required.";

/// Message for a `rel` that is not a non-empty array of strings.
pub const NON_EMPTY_STRINGS: &str = "MUST be a non-empty array of strings.";

/// Validation protocol shared by every node type.
pub trait Validate {
    /// Recomputes this node's ledger and validates every owned child.
    ///
    /// Returns true iff this node and all of its descendants have empty
    /// ledgers afterwards. Child messages stay in the children's ledgers.
    fn validate(&mut self) -> bool;

    /// This node's own ledger, as of the last [`Validate::validate`] call.
    fn errors(&self) -> &Ledger;
}

fn check_rel(rel: &Rel, errors: &mut Ledger) {
    if rel.is_absent() {
        errors.insert("rel", REQUIRED);
    }
    if !rel.is_valid() {
        errors.insert("rel", NON_EMPTY_STRINGS);
    }
}

fn validate_core(core: &mut EntityCore) -> bool {
    let mut valid = true;
    for action in &mut core.actions {
        valid &= action.validate();
    }
    for sub in &mut core.entities {
        valid &= sub.validate();
    }
    for link in &mut core.links {
        valid &= link.validate();
    }
    valid
}

impl Validate for Link {
    fn validate(&mut self) -> bool {
        self.errors.clear();
        check_rel(&self.rel, &mut self.errors);
        self.errors.is_empty()
    }

    fn errors(&self) -> &Ledger {
        &self.errors
    }
}

impl Validate for Field {
    fn validate(&mut self) -> bool {
        self.errors.clear();
        if self.name.is_empty() {
            self.errors.insert("name", REQUIRED);
        }
        self.errors.is_empty()
    }

    fn errors(&self) -> &Ledger {
        &self.errors
    }
}

impl Validate for Action {
    fn validate(&mut self) -> bool {
        self.errors.clear();
        if self.name.is_empty() {
            self.errors.insert("name", REQUIRED);
        }
        if self.href.is_empty() {
            self.errors.insert("href", REQUIRED);
        }
        let mut valid = self.errors.is_empty();
        for field in &mut self.fields {
            valid &= field.validate();
        }
        valid
    }

    fn errors(&self) -> &Ledger {
        &self.errors
    }
}

impl Validate for NestedEntity {
    fn validate(&mut self) -> bool {
        self.errors.clear();
        check_rel(&self.rel, &mut self.errors);
        let own = self.errors.is_empty();
        validate_core(&mut self.core) && own
    }

    fn errors(&self) -> &Ledger {
        &self.errors
    }
}

impl Validate for SubEntity {
    fn validate(&mut self) -> bool {
        match self {
            SubEntity::Link(link) => link.validate(),
            SubEntity::Entity(entity) => entity.validate(),
        }
    }

    fn errors(&self) -> &Ledger {
        match self {
            SubEntity::Link(link) => link.errors(),
            SubEntity::Entity(entity) => entity.errors(),
        }
    }
}

impl Validate for Entity {
    fn validate(&mut self) -> bool {
        self.errors.clear();
        let valid = validate_core(&mut self.core);
        if !valid {
            debug!(
                issues = collect_issues(self).len(),
                "entity failed validation"
            );
        }
        valid
    }

    fn errors(&self) -> &Ledger {
        &self.errors
    }
}

// =============================================================================
// REPORTING
// =============================================================================

/// A single validation message, located in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Path of the owning node, e.g. `/actions/0/fields/1`. Empty for the root.
    pub path: String,
    /// Member the message is about.
    pub field: &'static str,
    pub message: &'static str,
}

/// Flattens every ledger in the tree into a list, in document order.
///
/// This reads the ledgers as they are; call [`Validate::validate`] first.
pub fn collect_issues(entity: &Entity) -> Vec<Issue> {
    let mut issues = Vec::new();
    push_ledger(&mut issues, "", &entity.errors);
    collect_core(&mut issues, "", &entity.core);
    issues
}

fn push_ledger(issues: &mut Vec<Issue>, path: &str, ledger: &Ledger) {
    for (field, messages) in ledger.iter() {
        for &message in messages {
            issues.push(Issue {
                path: path.to_string(),
                field,
                message,
            });
        }
    }
}

fn collect_core(issues: &mut Vec<Issue>, path: &str, core: &EntityCore) {
    for (i, action) in core.actions.iter().enumerate() {
        let action_path = format!("{path}/actions/{i}");
        push_ledger(issues, &action_path, &action.errors);
        for (j, field) in action.fields.iter().enumerate() {
            push_ledger(issues, &format!("{action_path}/fields/{j}"), &field.errors);
        }
    }
    for (i, sub) in core.entities.iter().enumerate() {
        let sub_path = format!("{path}/entities/{i}");
        match sub {
            SubEntity::Link(link) => push_ledger(issues, &sub_path, &link.errors),
            SubEntity::Entity(entity) => {
                push_ledger(issues, &sub_path, &entity.errors);
                collect_core(issues, &sub_path, &entity.core);
            }
        }
    }
    for (i, link) in core.links.iter().enumerate() {
        push_ledger(issues, &format!("{path}/links/{i}"), &link.errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityBuilder;

    #[test]
    fn test_link_rel_absent_reports_both() {
        let mut link = Link::new(Rel::Absent, "/x");
        assert!(!link.validate());
        assert!(link.errors().contains("rel", REQUIRED));
        assert!(link.errors().contains("rel", NON_EMPTY_STRINGS));
        assert_eq!(link.errors().get("rel").unwrap().len(), 2);
    }

    #[test]
    fn test_link_rel_empty_reports_shape_only() {
        let mut link = Link::new(Rel::Values(vec![]), "/x");
        assert!(!link.validate());
        assert!(!link.errors().contains("rel", REQUIRED));
        assert!(link.errors().contains("rel", NON_EMPTY_STRINGS));
    }

    #[test]
    fn test_field_name_required() {
        let mut field = Field::new("");
        assert!(!field.validate());
        assert!(field.errors().contains("name", REQUIRED));

        field.name = "qty".into();
        assert!(field.validate());
        assert!(field.errors().is_empty());
    }

    #[test]
    fn test_action_errors_stay_in_owner() {
        let mut action = Action::new("", "");
        action.fields.push(Field::new(""));

        assert!(!action.validate());
        assert!(action.errors().contains("name", REQUIRED));
        assert!(action.errors().contains("href", REQUIRED));
        assert_eq!(action.errors().len(), 2);
        assert!(action.fields[0].errors().contains("name", REQUIRED));
    }

    #[test]
    fn test_action_invalid_only_through_field() {
        let mut action = Action::new("add", "/items");
        action.fields.push(Field::new(""));

        assert!(!action.validate());
        assert!(action.errors().is_empty());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut entity = EntityBuilder::new().link(Vec::<String>::new(), "/x").build();

        assert!(!entity.validate());
        let first = entity.core.links[0].errors().clone();
        assert!(!entity.validate());
        assert_eq!(entity.core.links[0].errors(), &first);
        assert_eq!(first.get("rel").unwrap().len(), 1);
    }

    #[test]
    fn test_validate_recomputes_after_mutation() {
        let mut entity = EntityBuilder::new().link(Vec::<String>::new(), "/x").build();
        assert!(!entity.validate());

        entity.core.links[0].rel = Rel::new(["self"]);
        assert!(entity.validate());
        assert!(entity.core.links[0].errors().is_empty());
    }

    #[test]
    fn test_nested_entity_rel_and_children() {
        let mut entity = EntityBuilder::new()
            .sub_entity(Vec::<String>::new(), |e| e.action("go", "", |a| a))
            .build();

        assert!(!entity.validate());
        assert!(entity.errors().is_empty());

        let nested = entity.core.entities[0].as_entity().unwrap();
        assert!(nested.errors().contains("rel", NON_EMPTY_STRINGS));
        assert!(nested.core.actions[0].errors().contains("href", REQUIRED));
    }

    #[test]
    fn test_collect_issues_paths() {
        let mut entity = EntityBuilder::new()
            .action("add", "/items", |a| a.field("", |f| f))
            .sub_entity(["item"], |e| e.link(Vec::<String>::new(), "/y"))
            .link(["self"], "/x")
            .build();

        assert!(!entity.validate());
        let issues = collect_issues(&entity);
        let located: Vec<_> = issues
            .iter()
            .map(|i| (i.path.as_str(), i.field, i.message))
            .collect();

        assert_eq!(
            located,
            vec![
                ("/actions/0/fields/0", "name", REQUIRED),
                ("/entities/0/links/0", "rel", NON_EMPTY_STRINGS),
            ]
        );
    }

    #[test]
    fn test_valid_entity() {
        let mut entity = EntityBuilder::new()
            .action("add", "/items", |a| a.field("qty", |f| f))
            .sub_entity(["item"], |e| e.link(["self"], "/items/1"))
            .embedded_link(["related"], "/related")
            .build();

        assert!(entity.validate());
        assert!(collect_issues(&entity).is_empty());
    }
}
