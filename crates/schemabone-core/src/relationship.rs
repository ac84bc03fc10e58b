//! Relationship metadata.
//!
//! Relations are declared on the forward side only, as part of a
//! [`FieldInfo`](crate::FieldInfo). The inbound (reverse) view is derived by
//! scanning every registered model for relations that target a given model.

use std::fmt;

/// Composite identity of a model: the group (app label) plus the model name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelKey {
    /// Group the model belongs to (e.g. `"shop"`).
    pub app_label: String,
    /// Lowercase model name (e.g. `"order"`).
    pub model_name: String,
}

impl ModelKey {
    /// Create a new key. Both parts are lowercased.
    pub fn new(app_label: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            app_label: app_label.into().to_lowercase(),
            model_name: model_name.into().to_lowercase(),
        }
    }

    /// The exported identity string, `"<app_label>__<model_name>"`.
    pub fn identity(&self) -> String {
        format!("{}__{}", self.app_label, self.model_name)
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__{}", self.app_label, self.model_name)
    }
}

/// The cardinality of a forward relation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelationshipKind {
    /// Many-to-one: many `Order`s belong to one `Customer`.
    #[default]
    ManyToOne,
    /// One-to-one: a `Customer` has one `Profile`.
    OneToOne,
    /// Many-to-many: `Order`s have many `Tag`s.
    ManyToMany,
}

impl RelationshipKind {
    /// Whether the forward side holds many related objects.
    pub const fn is_many(self) -> bool {
        matches!(self, RelationshipKind::ManyToMany)
    }
}

/// Metadata about a forward relation declared on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationInfo {
    /// The model this relation points at.
    pub target: ModelKey,

    /// Kind of relation.
    pub kind: RelationshipKind,

    /// Name of the reverse accessor on the target model.
    ///
    /// When unset, the source model's name is used. A trailing `+` hides the
    /// reverse accessor entirely.
    pub related_name: Option<String>,
}

impl RelationInfo {
    /// Create a new relation to `target`.
    pub fn new(target: ModelKey, kind: RelationshipKind) -> Self {
        Self {
            target,
            kind,
            related_name: None,
        }
    }

    /// Many-to-one relation to `target`.
    pub fn many_to_one(target: ModelKey) -> Self {
        Self::new(target, RelationshipKind::ManyToOne)
    }

    /// One-to-one relation to `target`.
    pub fn one_to_one(target: ModelKey) -> Self {
        Self::new(target, RelationshipKind::OneToOne)
    }

    /// Many-to-many relation to `target`.
    pub fn many_to_many(target: ModelKey) -> Self {
        Self::new(target, RelationshipKind::ManyToMany)
    }

    /// Set the reverse accessor name.
    pub fn related_name(mut self, name: impl Into<String>) -> Self {
        self.related_name = Some(name.into());
        self
    }

    /// Whether the reverse accessor is suppressed.
    pub fn is_hidden(&self) -> bool {
        self.related_name
            .as_deref()
            .is_some_and(|name| name.ends_with('+'))
    }

    /// Name of the reverse accessor as seen from the target model.
    pub fn reverse_name(&self, source: &ModelKey) -> String {
        self.related_name
            .clone()
            .unwrap_or_else(|| source.model_name.clone())
    }
}
