//! Model definitions and per-model export declarations.
//!
//! [`ModelInfo`] is the runtime description of one host model: its identity,
//! its native fields in declaration order, and the [`ModelConfig`] block of
//! declarations that steer the export (title field, per-field overrides,
//! computed and annotated fields, model-level validators).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field::{Choice, FieldInfo};
use crate::relationship::ModelKey;

/// Attribute name → replacement value, as declared by a model.
pub type AttributeMap = Map<String, Value>;

/// A read-only computed field declared on the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedField {
    /// Field name
    pub name: String,
    /// Exported type name, passed through verbatim
    #[serde(rename = "type")]
    pub field_type: String,
    /// Label; defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Allowed values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

impl ComputedField {
    /// Create a computed field of the given type.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            display_name: None,
            choices: None,
        }
    }

    /// Set the label.
    pub fn display_name(mut self, label: impl Into<String>) -> Self {
        self.display_name = Some(label.into());
        self
    }

    /// Set the choice set.
    pub fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }
}

/// Export declarations attached to a model.
///
/// Every part is optional; an empty config exports the model as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelConfig {
    /// Field shown as the title of a record
    pub title_field: Option<String>,
    /// Per-field attribute overrides, keyed by field name
    pub field_config: BTreeMap<String, AttributeMap>,
    /// Declared read-only computed fields, in order
    pub computed_fields: Vec<ComputedField>,
    /// Expression-backed fields, in order
    pub annotated_fields: Vec<(String, AttributeMap)>,
    /// Model-level validators, exported verbatim
    pub validators: Option<Vec<Value>>,
}

impl ModelConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title field.
    pub fn title_field(mut self, name: impl Into<String>) -> Self {
        self.title_field = Some(name.into());
        self
    }

    /// Declare overrides for one field.
    ///
    /// Repeated calls for the same field merge, later keys winning.
    pub fn field_config(mut self, field: impl Into<String>, attrs: AttributeMap) -> Self {
        self.field_config.entry(field.into()).or_default().extend(attrs);
        self
    }

    /// Declare a computed field.
    pub fn computed_field(mut self, field: ComputedField) -> Self {
        self.computed_fields.push(field);
        self
    }

    /// Declare an annotated field.
    pub fn annotated_field(mut self, name: impl Into<String>, attrs: AttributeMap) -> Self {
        self.annotated_fields.push((name.into(), attrs));
        self
    }

    /// Set model-level validators.
    pub fn validators(mut self, validators: Vec<Value>) -> Self {
        self.validators = Some(validators);
        self
    }

    /// Overrides declared for `field`, if any.
    pub fn overrides_for(&self, field: &str) -> Option<&AttributeMap> {
        self.field_config.get(field)
    }
}

/// Runtime description of a host model.
///
/// # Example
///
/// ```
/// use schemabone_core::{FieldInfo, ModelInfo};
///
/// let model = ModelInfo::new("shop", "Order")
///     .verbose_name("order")
///     .field(FieldInfo::new("id", "AutoField").primary_key(true))
///     .field(FieldInfo::new("note", "TextField").blank(true));
///
/// assert_eq!(model.identity(), "shop__order");
/// assert_eq!(model.pk_name(), "id");
/// assert_eq!(model.fields().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ModelInfo {
    key: ModelKey,
    verbose_name: Option<String>,
    fields: Vec<FieldInfo>,
    config: ModelConfig,
}

impl ModelInfo {
    /// Create a model in the given group.
    pub fn new(app_label: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            key: ModelKey::new(app_label, model_name),
            verbose_name: None,
            fields: Vec::new(),
            config: ModelConfig::default(),
        }
    }

    /// Set the human-readable model name.
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = Some(name.into());
        self
    }

    /// Append a field.
    pub fn field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    /// Attach export declarations.
    pub fn config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    /// Composite key of this model.
    pub fn key(&self) -> &ModelKey {
        &self.key
    }

    /// Exported identity, `"<app_label>__<model_name>"`.
    pub fn identity(&self) -> String {
        self.key.identity()
    }

    /// Group this model belongs to.
    pub fn app_label(&self) -> &str {
        &self.key.app_label
    }

    /// Lowercase model name.
    pub fn model_name(&self) -> &str {
        &self.key.model_name
    }

    /// Declared human-readable name, if any.
    pub fn declared_verbose_name(&self) -> Option<&str> {
        self.verbose_name.as_deref()
    }

    /// Human-readable name, falling back to the model name.
    pub fn display_name(&self) -> &str {
        self.verbose_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.key.model_name)
    }

    /// Native fields in declaration order.
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Name of the primary key field, `"id"` when none is flagged.
    pub fn pk_name(&self) -> &str {
        self.fields
            .iter()
            .find(|f| f.primary_key)
            .map_or("id", |f| f.name.as_str())
    }

    /// Export declarations.
    pub fn model_config(&self) -> &ModelConfig {
        &self.config
    }
}

/// A statically declared model.
///
/// Implemented by host types that want to be registered by type rather than
/// by building a [`ModelInfo`] by hand.
pub trait Model {
    /// Describe this model.
    fn model_info() -> ModelInfo;
}
