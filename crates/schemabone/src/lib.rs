//! Schemabone: declarative field schemas for data-model definitions.
//!
//! Schemabone introspects the fields declared on host models (including
//! relation, computed and annotated fields) and produces a uniform schema
//! descriptor per model, for generic clients such as form renderers,
//! validators or API consumers.
//!
//! # Example
//!
//! ```
//! use schemabone::prelude::*;
//!
//! let mut apps = AppRegistry::new();
//! apps.register(
//!     ModelInfo::new("shop", "customer")
//!         .verbose_name("Customer")
//!         .field(FieldInfo::new("id", "AutoField").primary_key(true))
//!         .field(FieldInfo::new("email", "EmailField").max_length(254)),
//! )
//! .unwrap();
//! apps.register(
//!     ModelInfo::new("shop", "order")
//!         .field(FieldInfo::new("id", "AutoField").primary_key(true))
//!         .field(
//!             FieldInfo::new("customer", "ForeignKey")
//!                 .relation(RelationInfo::many_to_one(ModelKey::new("shop", "customer"))),
//!         ),
//! )
//! .unwrap();
//!
//! let registry = export_schema(&apps, &ExportOptions::new(["shop"]), &ComputedRegistry::new());
//! let customer = registry.get("shop__customer").unwrap();
//! assert_eq!(customer.field("order").unwrap().field_type, "bref");
//! ```

pub mod export;

pub use schemabone_core::{
    AppRegistry, AttributeMap, Choice, ComputedField, DefaultSpec, Error, FieldInfo, Model,
    ModelConfig, ModelInfo, ModelKey, NativeValidator, RelationInfo, RelationshipKind, Result,
    ValidatorArgs,
};
pub use export::{
    ComputedAccessor, ComputedRegistry, ExportOptions, FieldDescriptor, SchemaEntry,
    SchemaExporter, SchemaRegistry, export_schema,
};

/// Export the groups named in `options` and serialize the registry as
/// indented JSON.
pub fn export_schema_json(
    apps: &AppRegistry,
    options: &ExportOptions,
    computed: &ComputedRegistry,
) -> serde_json::Result<String> {
    let registry = export_schema(apps, options, computed);
    let json = registry.to_json_pretty()?;
    tracing::debug!(models = registry.len(), bytes = json.len(), "Serialized field schema");
    Ok(json)
}

/// Commonly used types.
pub mod prelude {
    pub use crate::export::{
        CanonicalFieldKind, ComputedAccessor, ComputedRegistry, ExportOptions, FieldDescriptor,
        SchemaEntry, SchemaExporter, SchemaRegistry, ValidatorRule, annotation, export_schema,
    };
    pub use schemabone_core::{
        AppRegistry, AttributeMap, Choice, ComputedField, DefaultSpec, FieldInfo, Model,
        ModelConfig, ModelInfo, ModelKey, NativeValidator, RelationInfo, RelationshipKind,
    };
}
