//! Export engine re-exports.
//!
//! The implementation lives in the separate `schemabone-export` crate. This
//! module exists so the `schemabone` facade can expose the engine without
//! forcing users to depend on sub-crates directly.

pub use schemabone_export::{
    ANNOTATION_KEY, CanonicalFieldKind, ComputedAccessor, ComputedRegistry, ExportOptions,
    FieldDescriptor, SchemaEntry, SchemaExporter, SchemaRegistry, ValidatorKind, ValidatorRule,
    annotation, classify, export_schema, resolve_overrides,
};
