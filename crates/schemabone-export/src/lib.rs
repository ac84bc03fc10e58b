//! Field schema export engine.
//!
//! `schemabone-export` reads host models through `schemabone-core` and
//! produces a [`SchemaRegistry`]: one declarative [`SchemaEntry`] per model,
//! describing field names, types, constraints, defaults and relations for
//! clients that know nothing about the host data model.
//!
//! # Pipeline
//!
//! - [`kind`] classifies native type tags into canonical kinds.
//! - [`validators`] translates native validators into portable rules.
//! - [`overrides`] resolves per-field override declarations.
//! - [`descriptor`] builds native field descriptors.
//! - [`reverse`] derives descriptors for inbound relations.
//! - [`computed`] adds computed, registered and annotated fields.
//! - [`assemble`] gathers everything per model and per export.
//!
//! The export is best-effort: a field that cannot be described is left out,
//! never failing the whole export.

pub mod assemble;
pub mod computed;
pub mod descriptor;
pub mod kind;
pub mod options;
pub mod overrides;
pub mod reverse;
pub mod validators;

pub use assemble::{SchemaEntry, SchemaExporter, SchemaRegistry, export_schema};
pub use computed::{ANNOTATION_KEY, ComputedAccessor, ComputedRegistry, annotation};
pub use descriptor::FieldDescriptor;
pub use kind::{CanonicalFieldKind, classify};
pub use options::ExportOptions;
pub use overrides::resolve_overrides;
pub use validators::{ValidatorKind, ValidatorRule};
