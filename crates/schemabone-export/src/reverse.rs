//! Reverse relation descriptors.
//!
//! A forward relation declared on model A towards model B gives B an
//! inbound accessor. B's schema lists that accessor as a synthetic field of
//! type `mref` (the forward side is many-to-many) or `bref` (otherwise).

use schemabone_core::{AppRegistry, FieldInfo, ModelInfo, RelationInfo};

use crate::descriptor::FieldDescriptor;
use crate::overrides::resolve_overrides;

/// Exported type of a many-valued reverse relation.
pub const MANY_REVERSE_TYPE: &str = "mref";
/// Exported type of a single-valued reverse relation.
pub const SINGLE_REVERSE_TYPE: &str = "bref";

/// A forward relation pointing at the model being exported.
#[derive(Debug, Clone, Copy)]
pub struct ReverseRelation<'a> {
    /// Model declaring the forward field.
    pub source: &'a ModelInfo,
    /// The forward field.
    pub field: &'a FieldInfo,
    /// Relation metadata of the forward field.
    pub relation: &'a RelationInfo,
}

impl ReverseRelation<'_> {
    /// Name of the accessor on the target model.
    pub fn name(&self) -> String {
        self.relation.reverse_name(self.source.key())
    }
}

/// Every visible forward relation in `apps` whose target is `model`.
///
/// Self-referential relations are included.
pub fn reverse_relations<'a>(
    apps: &'a AppRegistry,
    model: &ModelInfo,
) -> Vec<ReverseRelation<'a>> {
    apps.all_models()
        .flat_map(|source| {
            source.fields().iter().filter_map(move |field| {
                let relation = field.relation.as_ref()?;
                if &relation.target != model.key() || relation.is_hidden() {
                    return None;
                }
                Some(ReverseRelation {
                    source,
                    field,
                    relation,
                })
            })
        })
        .collect()
}

/// Build the synthetic descriptor of one reverse relation on `model`.
pub fn build_reverse(model: &ModelInfo, reverse: &ReverseRelation<'_>) -> FieldDescriptor {
    let field_type = if reverse.relation.kind.is_many() {
        MANY_REVERSE_TYPE
    } else {
        SINGLE_REVERSE_TYPE
    };

    let name = reverse.name();
    let mut descriptor =
        FieldDescriptor::new(name.as_str(), reverse.source.display_name(), field_type);
    descriptor.reference = Some(reverse.source.identity());
    descriptor.ref_field = Some(reverse.field.name.clone());
    descriptor.merge(&resolve_overrides(model, &name));
    descriptor
}

/// Descriptors for every inbound relation of `model`.
pub fn reverse_descriptors(apps: &AppRegistry, model: &ModelInfo) -> Vec<FieldDescriptor> {
    reverse_relations(apps, model)
        .iter()
        .map(|reverse| build_reverse(model, reverse))
        .collect()
}
