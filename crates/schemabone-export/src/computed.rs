//! Computed, registered and annotated (non-stored) fields.
//!
//! Three independent sources feed read-only descriptors into a schema entry:
//!
//! - computed fields declared in the model's [`ModelConfig`](schemabone_core::ModelConfig),
//! - computed accessors registered in a [`ComputedRegistry`] passed to the export,
//! - annotated fields, whose value comes from an expression.
//!
//! All of them are exported with `required: false, readonly: true`.

use std::collections::BTreeMap;

use convert_case::{Case, Casing};
use schemabone_core::{AttributeMap, ComputedField, ModelInfo, ModelKey};
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::kind::CanonicalFieldKind;

/// Attribute holding the expression of an annotated field; never exported.
pub const ANNOTATION_KEY: &str = "annotation";

/// A computed accessor registered for a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedAccessor {
    /// Exported type name
    pub field_type: String,
    /// Label
    pub display_name: String,
}

impl ComputedAccessor {
    /// Create a new accessor description.
    pub fn new(field_type: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            display_name: display_name.into(),
        }
    }
}

/// Computed accessors keyed by model, then by accessor name.
///
/// Populated by whatever mechanism defines accessors on the host side and
/// handed to the export call.
#[derive(Debug, Clone, Default)]
pub struct ComputedRegistry {
    accessors: BTreeMap<ModelKey, BTreeMap<String, ComputedAccessor>>,
}

impl ComputedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an accessor for `model`. A later registration with the same
    /// name replaces the earlier one.
    pub fn register(
        &mut self,
        model: ModelKey,
        name: impl Into<String>,
        accessor: ComputedAccessor,
    ) {
        self.accessors
            .entry(model)
            .or_default()
            .insert(name.into(), accessor);
    }

    /// Builder-style registration.
    pub fn with(
        mut self,
        model: ModelKey,
        name: impl Into<String>,
        accessor: ComputedAccessor,
    ) -> Self {
        self.register(model, name, accessor);
        self
    }

    /// Accessors registered for `model`, ordered by name.
    pub fn accessors_for(
        &self,
        model: &ModelKey,
    ) -> impl Iterator<Item = (&str, &ComputedAccessor)> {
        self.accessors
            .get(model)
            .into_iter()
            .flat_map(|accessors| accessors.iter().map(|(name, a)| (name.as_str(), a)))
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

fn read_only(mut descriptor: FieldDescriptor) -> FieldDescriptor {
    descriptor.extra.shift_remove("required");
    descriptor.extra.shift_remove("readonly");
    descriptor.required = false;
    descriptor.readonly = Some(true);
    descriptor
}

/// Descriptor of a computed field declared on the model.
pub fn declared_descriptor(field: &ComputedField) -> FieldDescriptor {
    let display_name = field.display_name.as_deref().unwrap_or(&field.name);
    let mut descriptor =
        FieldDescriptor::new(field.name.as_str(), display_name, field.field_type.as_str());
    descriptor.choices = field.choices.clone();
    read_only(descriptor)
}

/// Descriptor of a registered computed accessor.
pub fn accessor_descriptor(name: &str, accessor: &ComputedAccessor) -> FieldDescriptor {
    read_only(FieldDescriptor::new(
        name,
        accessor.display_name.as_str(),
        accessor.field_type.as_str(),
    ))
}

/// Descriptor of an annotated field.
///
/// Every attribute except [`ANNOTATION_KEY`] is copied with its key
/// camel-cased, whatever the shape of its value. The label defaults to the field name and the type to the
/// text kind.
pub fn annotated_descriptor(name: &str, attrs: &AttributeMap) -> FieldDescriptor {
    let mut descriptor = FieldDescriptor::new(name, name, CanonicalFieldKind::Text.display_name());

    let copied: AttributeMap = attrs
        .iter()
        .filter(|(key, _)| key.as_str() != ANNOTATION_KEY)
        .map(|(key, value)| (key.to_case(Case::Camel), value.clone()))
        .collect();
    descriptor.merge(&copied);

    read_only(descriptor)
}

/// Descriptors of every non-stored field of `model`, in source order:
/// declared computed fields, registered accessors, annotated fields.
pub fn computed_descriptors(
    model: &ModelInfo,
    registry: &ComputedRegistry,
) -> Vec<FieldDescriptor> {
    let config = model.model_config();

    let declared = config.computed_fields.iter().map(declared_descriptor);
    let registered = registry
        .accessors_for(model.key())
        .map(|(name, accessor)| accessor_descriptor(name, accessor));
    let annotated = config
        .annotated_fields
        .iter()
        .map(|(name, attrs)| annotated_descriptor(name, attrs));

    declared.chain(registered).chain(annotated).collect()
}

/// Convenience for building annotated-field attribute maps.
pub fn annotation(expression: impl Into<Value>, field_type: &str) -> AttributeMap {
    let mut attrs = AttributeMap::new();
    attrs.insert(ANNOTATION_KEY.to_string(), expression.into());
    attrs.insert("type".to_string(), Value::String(field_type.to_string()));
    attrs
}
