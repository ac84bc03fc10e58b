//! Field descriptors and the native field builder.
//!
//! A [`FieldDescriptor`] is the exported unit: one per native, reverse,
//! computed or annotated field. Typed attributes cover everything the
//! exporter computes. Attributes supplied by an override or an annotation
//! that no typed slot can hold verbatim land in `extra`, which takes
//! precedence over the typed slot of the same name on output.

use schemabone_core::{
    AppRegistry, AttributeMap, Choice, DefaultSpec, Error, FieldInfo, ModelInfo, Result,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::kind::CanonicalFieldKind;
use crate::overrides::resolve_overrides;
use crate::validators::{self, ValidatorRule};

/// Exported attribute names of the typed slots, in output order.
const TYPED_KEYS: &[&str] = &[
    "name",
    "displayName",
    "required",
    "primaryKey",
    "type",
    "help",
    "choices",
    "editable",
    "validators",
    "default",
    "maxLength",
    "precision",
    "maxDigits",
    "ref",
    "refField",
    "readonly",
];

/// Exported description of one field.
///
/// Serializes as a JSON object with camelCase keys. Unset optional
/// attributes and an empty validator list are omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name, unique within a schema entry
    pub name: String,
    /// Human-readable label
    pub display_name: String,
    /// Whether a value must be supplied
    pub required: bool,
    /// Primary key flag; only native fields carry it
    pub primary_key: Option<bool>,
    /// Exported type name (`type`)
    pub field_type: String,
    pub help: Option<String>,
    pub choices: Option<Vec<Choice>>,
    /// Present only as `false`; absence means editable
    pub editable: Option<bool>,
    pub validators: Vec<ValidatorRule>,
    pub default: Option<Value>,
    pub max_length: Option<u32>,
    /// Digits after the decimal point
    pub precision: Option<u32>,
    pub max_digits: Option<u32>,
    /// Identity of the related model (`ref`)
    pub reference: Option<String>,
    /// Field on the related model that reciprocates this relation
    pub ref_field: Option<String>,
    pub readonly: Option<bool>,
    /// Attributes kept verbatim, keyed by exported name
    pub extra: Map<String, Value>,
}

/// Read `value` as a `T` only if `T` serializes back to the same value.
fn exact<T: DeserializeOwned + Serialize>(value: &Value) -> Option<T> {
    let typed: T = serde_json::from_value(value.clone()).ok()?;
    (serde_json::to_value(&typed).ok()? == *value).then_some(typed)
}

fn assign<T: DeserializeOwned + Serialize>(slot: &mut T, value: &Value) -> bool {
    match exact(value) {
        Some(typed) => {
            *slot = typed;
            true
        }
        None => false,
    }
}

fn assign_opt<T: DeserializeOwned + Serialize>(slot: &mut Option<T>, value: &Value) -> bool {
    *slot = exact(value);
    slot.is_some()
}

fn insert_opt<T: Serialize>(
    attrs: &mut AttributeMap,
    key: &str,
    value: Option<&T>,
) -> serde_json::Result<()> {
    if let Some(value) = value {
        attrs.insert(key.to_string(), serde_json::to_value(value)?);
    }
    Ok(())
}

impl FieldDescriptor {
    /// Create a descriptor with only the mandatory attributes set.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            required: false,
            primary_key: None,
            field_type: field_type.into(),
            help: None,
            choices: None,
            editable: None,
            validators: Vec::new(),
            default: None,
            max_length: None,
            precision: None,
            max_digits: None,
            reference: None,
            ref_field: None,
            readonly: None,
            extra: Map::new(),
        }
    }

    /// Rebuild a descriptor from its exported attributes.
    ///
    /// `name` and `type` must be strings; every other attribute is merged.
    pub fn from_attributes(attrs: &AttributeMap) -> Result<Self> {
        let text = |key: &str| {
            attrs.get(key).and_then(Value::as_str).ok_or_else(|| {
                Error::InvalidConfig(format!("field descriptor lacks a string `{key}`"))
            })
        };
        let name = text("name")?;
        let mut descriptor = Self::new(name, name, text("type")?);
        descriptor.merge(attrs);
        Ok(descriptor)
    }

    /// Merge `attrs` into this descriptor. Every key of `attrs` wins over
    /// the current attribute of the same name.
    ///
    /// A value a typed slot holds verbatim goes into that slot. Any other
    /// value is kept as is in `extra`; an optional typed slot it shadows is
    /// cleared.
    pub fn merge(&mut self, attrs: &AttributeMap) {
        for (key, value) in attrs {
            if self.assign_key(key, value) {
                self.extra.shift_remove(key);
            } else {
                if TYPED_KEYS.contains(&key.as_str()) {
                    tracing::debug!(
                        field = self.name.as_str(),
                        key = key.as_str(),
                        "Keeping override value verbatim"
                    );
                }
                self.extra.insert(key.clone(), value.clone());
            }
        }
    }

    fn assign_key(&mut self, key: &str, value: &Value) -> bool {
        match key {
            "name" => assign(&mut self.name, value),
            "displayName" => assign(&mut self.display_name, value),
            "required" => assign(&mut self.required, value),
            "primaryKey" => assign_opt(&mut self.primary_key, value),
            "type" => assign(&mut self.field_type, value),
            "help" => assign_opt(&mut self.help, value),
            "choices" => assign_opt(&mut self.choices, value),
            "editable" => assign_opt(&mut self.editable, value),
            "validators" => {
                let rules = exact::<Vec<ValidatorRule>>(value).filter(|r| !r.is_empty());
                self.validators = rules.unwrap_or_default();
                !self.validators.is_empty()
            }
            "default" => assign_opt(&mut self.default, value),
            "maxLength" => assign_opt(&mut self.max_length, value),
            "precision" => assign_opt(&mut self.precision, value),
            "maxDigits" => assign_opt(&mut self.max_digits, value),
            "ref" => assign_opt(&mut self.reference, value),
            "refField" => assign_opt(&mut self.ref_field, value),
            "readonly" => assign_opt(&mut self.readonly, value),
            _ => false,
        }
    }

    /// Exported attributes in output order.
    pub fn attributes(&self) -> serde_json::Result<AttributeMap> {
        let mut typed = AttributeMap::new();
        typed.insert("name".to_string(), Value::String(self.name.clone()));
        typed.insert(
            "displayName".to_string(),
            Value::String(self.display_name.clone()),
        );
        typed.insert("required".to_string(), Value::Bool(self.required));
        insert_opt(&mut typed, "primaryKey", self.primary_key.as_ref())?;
        typed.insert("type".to_string(), Value::String(self.field_type.clone()));
        insert_opt(&mut typed, "help", self.help.as_ref())?;
        insert_opt(&mut typed, "choices", self.choices.as_ref())?;
        insert_opt(&mut typed, "editable", self.editable.as_ref())?;
        if !self.validators.is_empty() {
            typed.insert(
                "validators".to_string(),
                serde_json::to_value(&self.validators)?,
            );
        }
        insert_opt(&mut typed, "default", self.default.as_ref())?;
        insert_opt(&mut typed, "maxLength", self.max_length.as_ref())?;
        insert_opt(&mut typed, "precision", self.precision.as_ref())?;
        insert_opt(&mut typed, "maxDigits", self.max_digits.as_ref())?;
        insert_opt(&mut typed, "ref", self.reference.as_ref())?;
        insert_opt(&mut typed, "refField", self.ref_field.as_ref())?;
        insert_opt(&mut typed, "readonly", self.readonly.as_ref())?;

        let mut attrs = AttributeMap::new();
        for key in TYPED_KEYS {
            if let Some(value) = self.extra.get(*key).or_else(|| typed.get(*key)) {
                attrs.insert((*key).to_string(), value.clone());
            }
        }
        for (key, value) in &self.extra {
            if !TYPED_KEYS.contains(&key.as_str()) {
                attrs.insert(key.clone(), value.clone());
            }
        }
        Ok(attrs)
    }

    /// Look up an attribute by its exported name.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.attributes().ok()?.remove(key)
    }
}

impl Serialize for FieldDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.attributes()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let attrs = AttributeMap::deserialize(deserializer)?;
        Self::from_attributes(&attrs).map_err(serde::de::Error::custom)
    }
}

/// Materialize a declared default.
///
/// Factories are invoked; deferred defaults need call-time context and are
/// left out.
pub fn resolve_default(spec: &DefaultSpec) -> Option<Value> {
    match spec {
        DefaultSpec::Literal(value) => Some(value.clone()),
        DefaultSpec::Factory(make) => Some(make()),
        DefaultSpec::Deferred | DefaultSpec::Absent => None,
    }
}

/// Build the descriptor of a native field of `model`.
///
/// Returns `None` when a relation field's target cannot be resolved in
/// `apps`; the field is then left out of the schema.
pub fn build(
    apps: &AppRegistry,
    model: &ModelInfo,
    field: &FieldInfo,
    kind: CanonicalFieldKind,
) -> Option<FieldDescriptor> {
    let mut descriptor = FieldDescriptor::new(
        field.name.as_str(),
        field.verbose_name.as_str(),
        kind.display_name(),
    );
    descriptor.required = !field.blank;
    descriptor.primary_key = Some(field.primary_key);
    descriptor.help = Some(field.help_text.clone());
    descriptor.choices = field.choices.clone();
    if !field.editable {
        descriptor.editable = Some(false);
    }
    descriptor.validators = validators::translate(field);
    descriptor.default = resolve_default(&field.default);

    match kind {
        CanonicalFieldKind::String | CanonicalFieldKind::Text => {
            descriptor.max_length = field.max_length;
        }
        CanonicalFieldKind::Decimal => {
            descriptor.precision = field.decimal_places;
            descriptor.max_digits = field.max_digits;
        }
        CanonicalFieldKind::Ref | CanonicalFieldKind::RefMult => {
            let Some(relation) = field.relation.as_ref() else {
                tracing::debug!(
                    model = %model.key(),
                    field = field.name.as_str(),
                    "Relation field without a target, skipping"
                );
                return None;
            };
            let Some(target) = apps.get_model(&relation.target) else {
                tracing::debug!(
                    model = %model.key(),
                    field = field.name.as_str(),
                    target = %relation.target,
                    "Relation target is not registered, skipping"
                );
                return None;
            };
            descriptor.reference = Some(target.identity());
            if !relation.is_hidden() {
                descriptor.ref_field = Some(relation.reverse_name(model.key()));
            }
        }
        _ => {}
    }

    descriptor.merge(&resolve_overrides(model, &field.name));
    Some(descriptor)
}
