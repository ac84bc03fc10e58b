//! Native validation rules attached to fields.
//!
//! Validators are identified by their fully-qualified path (module path plus
//! name for function validators, class path plus name for object validators)
//! and carry whatever arguments the exporter can read off them.

use regex::Regex;
use serde_json::Value;

/// Arguments readable from a native validator object.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ValidatorArgs {
    /// The validator carries no exportable arguments.
    #[default]
    None,
    /// A limiting value (min/max validators).
    Limit(Value),
    /// A regular-expression validator.
    Regex {
        /// Pattern source.
        pattern: String,
        /// Whether a match means failure.
        inverse_match: bool,
        /// Raw flags bitmask as stored by the host.
        flags: u32,
    },
}

/// A validator attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeValidator {
    /// Fully-qualified identity, e.g. `"django.core.validators.MinValueValidator"`.
    pub identity: String,
    /// Arguments read from the validator.
    pub args: ValidatorArgs,
}

impl NativeValidator {
    /// Create a validator without arguments.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            args: ValidatorArgs::None,
        }
    }

    /// Create a validator carrying a limiting value.
    pub fn with_limit(identity: impl Into<String>, limit: impl Into<Value>) -> Self {
        Self {
            identity: identity.into(),
            args: ValidatorArgs::Limit(limit.into()),
        }
    }

    /// Create a regular-expression validator.
    pub fn with_regex(
        identity: impl Into<String>,
        pattern: impl Into<String>,
        inverse_match: bool,
        flags: u32,
    ) -> Self {
        Self {
            identity: identity.into(),
            args: ValidatorArgs::Regex {
                pattern: pattern.into(),
                inverse_match,
                flags,
            },
        }
    }

    /// Build the identity from a module path and a name.
    ///
    /// ```
    /// use schemabone_core::NativeValidator;
    ///
    /// let v = NativeValidator::qualified("django.core.validators", "validate_slug");
    /// assert_eq!(v.identity, "django.core.validators.validate_slug");
    /// ```
    pub fn qualified(path: &str, name: &str) -> Self {
        Self::new(format!("{path}.{name}"))
    }
}

/// Check whether a regex pattern compiles.
///
/// Returns an error message if the pattern is invalid, None if valid.
pub fn validate_pattern(pattern: &str) -> Option<String> {
    match Regex::new(pattern) {
        Ok(_) => None,
        Err(e) => Some(format!("invalid regex pattern: {e}")),
    }
}
