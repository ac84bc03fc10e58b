//! Schema assembly.
//!
//! One [`SchemaEntry`] per model gathers, in order, the native field
//! descriptors, the reverse relation descriptors and the non-stored field
//! descriptors. Entries are collected into a [`SchemaRegistry`] keyed by
//! model identity. Every export recomputes the registry from the live
//! model definitions.

use std::collections::{BTreeMap, HashSet};

use schemabone_core::{AppRegistry, ModelInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::computed::{ComputedRegistry, computed_descriptors};
use crate::descriptor::{self, FieldDescriptor};
use crate::kind::classify;
use crate::options::ExportOptions;
use crate::reverse::reverse_descriptors;

/// Exported schema of one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEntry {
    /// Composite identity, `"<group>__<model>"`
    pub name: String,
    pub display_name: String,
    /// Field used as the record title
    pub title_field: String,
    pub fields: Vec<FieldDescriptor>,
    /// Model-level validators, when declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validators: Option<Vec<Value>>,
}

impl SchemaEntry {
    /// Look up a field descriptor by name.
    ///
    /// When several descriptors share a name, the first one is returned.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Schema entries keyed by model identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaRegistry(BTreeMap<String, SchemaEntry>);

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry under its own identity.
    pub fn insert(&mut self, entry: SchemaEntry) {
        self.0.insert(entry.name.clone(), entry);
    }

    /// Merge another registry into this one. Entries of `other` win.
    pub fn extend(&mut self, other: SchemaRegistry) {
        self.0.extend(other.0);
    }

    /// Look up an entry by identity.
    pub fn get(&self, identity: &str) -> Option<&SchemaEntry> {
        self.0.get(identity)
    }

    /// Entries ordered by identity.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaEntry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no entry was exported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to a JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to an indented JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Walks the host models and produces schema entries.
///
/// # Example
///
/// ```
/// use schemabone_core::{AppRegistry, FieldInfo, ModelInfo};
/// use schemabone_export::{ExportOptions, SchemaExporter};
///
/// let mut apps = AppRegistry::new();
/// apps.register(
///     ModelInfo::new("blog", "post").field(FieldInfo::new("title", "CharField")),
/// )
/// .unwrap();
///
/// let registry = SchemaExporter::new(&apps).export(&ExportOptions::new(["blog"]));
/// let entry = registry.get("blog__post").unwrap();
/// assert_eq!(entry.title_field, "id");
/// assert_eq!(entry.fields[0].field_type, "string");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchemaExporter<'a> {
    apps: &'a AppRegistry,
    computed: Option<&'a ComputedRegistry>,
}

impl<'a> SchemaExporter<'a> {
    /// Create an exporter over `apps`.
    pub fn new(apps: &'a AppRegistry) -> Self {
        Self {
            apps,
            computed: None,
        }
    }

    /// Use `registry` as the source of registered computed accessors.
    pub fn with_computed(mut self, registry: &'a ComputedRegistry) -> Self {
        self.computed = Some(registry);
        self
    }

    /// Descriptors of the native fields of `model`.
    ///
    /// Unclassifiable fields and relation fields with an unresolvable target
    /// are left out.
    pub fn native_descriptors(&self, model: &ModelInfo) -> Vec<FieldDescriptor> {
        model
            .fields()
            .iter()
            .filter_map(|field| {
                let Some(kind) = classify(field) else {
                    tracing::debug!(
                        model = %model.key(),
                        field = field.name.as_str(),
                        native_type = field.effective_type(),
                        "Unsupported field type, skipping"
                    );
                    return None;
                };
                descriptor::build(self.apps, model, field, kind)
            })
            .collect()
    }

    /// Build the schema entry of one model.
    pub fn entry(&self, model: &ModelInfo) -> SchemaEntry {
        let empty = ComputedRegistry::new();
        let computed = self.computed.unwrap_or(&empty);

        let mut fields = self.native_descriptors(model);
        fields.extend(reverse_descriptors(self.apps, model));
        fields.extend(computed_descriptors(model, computed));

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                tracing::debug!(
                    model = %model.key(),
                    field = field.name.as_str(),
                    "Descriptor name appears more than once"
                );
            }
        }

        let config = model.model_config();
        SchemaEntry {
            name: model.identity(),
            display_name: model.display_name().to_string(),
            title_field: config
                .title_field
                .clone()
                .unwrap_or_else(|| model.pk_name().to_string()),
            fields,
            validators: config.validators.clone(),
        }
    }

    /// Build a single-entry registry for one model.
    pub fn assemble(&self, model: &ModelInfo) -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        registry.insert(self.entry(model));
        registry
    }

    /// Export every model of every group in `options`.
    ///
    /// Unknown or empty groups contribute nothing.
    pub fn export(&self, options: &ExportOptions) -> SchemaRegistry {
        let _span = tracing::debug_span!("export_schema", groups = options.groups.len()).entered();

        let mut registry = SchemaRegistry::new();
        for label in &options.groups {
            let models = self.apps.group_models(label).unwrap_or_default();
            if models.is_empty() {
                tracing::debug!(group = label.as_str(), "Group has no models");
                continue;
            }
            for model in models {
                registry.extend(self.assemble(model));
            }
        }

        tracing::info!(
            models = registry.len(),
            groups = options.groups.len(),
            "Exported field schema"
        );
        registry
    }
}

/// Export the groups named in `options`.
pub fn export_schema(
    apps: &AppRegistry,
    options: &ExportOptions,
    computed: &ComputedRegistry,
) -> SchemaRegistry {
    SchemaExporter::new(apps).with_computed(computed).export(options)
}
