//! Native field definitions.
//!
//! A [`FieldInfo`] is the read-only view of one field declared on a host
//! model: its label, flags, default, native type tag and (for relation
//! fields) the relation target.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::relationship::RelationInfo;
use crate::validate::NativeValidator;

/// One `(value, label)` entry of a field's choice set.
///
/// Serializes as a two-element array, e.g. `["draft", "Draft"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice(pub Value, pub String);

impl Choice {
    /// Create a new choice entry.
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self(value.into(), label.into())
    }

    /// The stored value of this choice.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// The human-readable label of this choice.
    pub fn label(&self) -> &str {
        &self.1
    }
}

/// How a field's default value is declared.
///
/// The variant is chosen by whoever describes the model, so consumers never
/// have to guess whether a stored default is a value or something to call.
#[derive(Debug, Clone, Default)]
pub enum DefaultSpec {
    /// No default declared.
    #[default]
    Absent,
    /// A concrete value.
    Literal(Value),
    /// A zero-argument factory whose result is the default.
    Factory(fn() -> Value),
    /// A default that needs call-time context (request, clock, user) and
    /// cannot be materialized ahead of time.
    Deferred,
}

impl DefaultSpec {
    /// Whether any default was declared, materializable or not.
    pub const fn is_declared(&self) -> bool {
        !matches!(self, DefaultSpec::Absent)
    }
}

/// Metadata about a model field as declared by the host data model.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Attribute name of the field on the model
    pub name: String,
    /// Human-readable label
    pub verbose_name: String,
    /// Whether an empty value is accepted (the inverse of "required")
    pub blank: bool,
    /// Whether this is the primary key
    pub primary_key: bool,
    /// Whether the field can be edited by clients
    pub editable: bool,
    /// Help text shown next to the field
    pub help_text: String,
    /// Allowed values, in declaration order
    pub choices: Option<Vec<Choice>>,
    /// Declared default value
    pub default: DefaultSpec,
    /// Primary native type tag (e.g. `"CharField"`)
    pub internal_type: String,
    /// More specific, framework-provided type tag.
    /// When set, this takes precedence over `internal_type`.
    pub type_hint: Option<String>,
    /// Maximum length for character fields
    pub max_length: Option<u32>,
    /// Digits after the decimal point for decimal fields
    pub decimal_places: Option<u32>,
    /// Total digits for decimal fields
    pub max_digits: Option<u32>,
    /// Relation target, for relation fields
    pub relation: Option<RelationInfo>,
    /// Native validators in declaration order
    pub validators: Vec<NativeValidator>,
}

impl FieldInfo {
    /// Create a field with the given name and native type tag.
    ///
    /// The label defaults to the name with underscores replaced by spaces.
    pub fn new(name: impl Into<String>, internal_type: impl Into<String>) -> Self {
        let name = name.into();
        let verbose_name = name.replace('_', " ");
        Self {
            name,
            verbose_name,
            blank: false,
            primary_key: false,
            editable: true,
            help_text: String::new(),
            choices: None,
            default: DefaultSpec::Absent,
            internal_type: internal_type.into(),
            type_hint: None,
            max_length: None,
            decimal_places: None,
            max_digits: None,
            relation: None,
            validators: Vec::new(),
        }
    }

    /// Set the human-readable label.
    pub fn verbose_name(mut self, label: impl Into<String>) -> Self {
        self.verbose_name = label.into();
        self
    }

    /// Set whether blank values are accepted.
    pub fn blank(mut self, value: bool) -> Self {
        self.blank = value;
        self
    }

    /// Mark as primary key.
    pub fn primary_key(mut self, value: bool) -> Self {
        self.primary_key = value;
        self
    }

    /// Set whether the field is editable.
    pub fn editable(mut self, value: bool) -> Self {
        self.editable = value;
        self
    }

    /// Set help text.
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    /// Set the choice set.
    pub fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }

    /// Set the declared default.
    pub fn default(mut self, spec: DefaultSpec) -> Self {
        self.default = spec;
        self
    }

    /// Set a literal default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = DefaultSpec::Literal(value.into());
        self
    }

    /// Set the framework-specific type tag.
    pub fn type_hint(mut self, tag: impl Into<String>) -> Self {
        self.type_hint = Some(tag.into());
        self
    }

    /// Set maximum length.
    pub fn max_length(mut self, value: u32) -> Self {
        self.max_length = Some(value);
        self
    }

    /// Set both digit limits for decimal fields.
    ///
    /// # Example
    ///
    /// ```
    /// use schemabone_core::FieldInfo;
    ///
    /// // DECIMAL(10, 2)
    /// let price = FieldInfo::new("price", "DecimalField").decimal(10, 2);
    /// assert_eq!(price.max_digits, Some(10));
    /// assert_eq!(price.decimal_places, Some(2));
    /// ```
    pub fn decimal(mut self, max_digits: u32, decimal_places: u32) -> Self {
        self.max_digits = Some(max_digits);
        self.decimal_places = Some(decimal_places);
        self
    }

    /// Set the relation target.
    pub fn relation(mut self, relation: RelationInfo) -> Self {
        self.relation = Some(relation);
        self
    }

    /// Append a native validator.
    pub fn validator(mut self, validator: NativeValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// The type tag used for classification.
    ///
    /// Priority: `type_hint` > `internal_type`.
    pub fn effective_type(&self) -> &str {
        self.type_hint.as_deref().unwrap_or(&self.internal_type)
    }
}
