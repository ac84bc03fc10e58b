//! Host data-model boundary for Schemabone.
//!
//! `schemabone-core` describes the models that the exporter reads. It does
//! not export anything itself: it defines the read-only inputs that
//! `schemabone-export` turns into schema descriptors.
//!
//! # Role In The Architecture
//!
//! - **Field metadata**: `FieldInfo`, `Choice` and `DefaultSpec` describe one native
//!   field, including its native type tag and validators.
//! - **Relations**: `RelationInfo` and `ModelKey` describe forward relations; reverse
//!   relations are derived by the exporter.
//! - **Model declarations**: `ModelInfo` plus `ModelConfig` (title field, per-field
//!   overrides, computed and annotated fields, model-level validators).
//! - **Discovery**: `AppRegistry` groups models by app label.
//!
//! Most applications should use the `schemabone` facade.

pub mod error;
pub mod field;
pub mod model;
pub mod registry;
pub mod relationship;
pub mod validate;

pub use error::{Error, Result};
pub use field::{Choice, DefaultSpec, FieldInfo};
pub use model::{AttributeMap, ComputedField, Model, ModelConfig, ModelInfo};
pub use registry::AppRegistry;
pub use relationship::{ModelKey, RelationInfo, RelationshipKind};
pub use validate::{NativeValidator, ValidatorArgs, validate_pattern};
