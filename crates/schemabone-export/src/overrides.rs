//! Per-field override configuration.
//!
//! Models may declare replacement attributes for any exported field. Keys are
//! written in the host's naming convention and translated to descriptor
//! attribute names here; the descriptor merge then gives them precedence
//! over computed values.

use schemabone_core::{AttributeMap, ModelInfo};
use serde_json::Value;

/// Host-convention attribute name → descriptor attribute name.
const KEY_RENAMES: &[(&str, &str)] = &[
    ("verbose_name", "displayName"),
    ("display_name", "displayName"),
    ("help_text", "help"),
    ("max_length", "maxLength"),
    ("decimal_places", "precision"),
    ("max_digits", "maxDigits"),
    ("blank", "required"),
    ("primary_key", "primaryKey"),
    ("title_field", "titleField"),
    ("ref_field", "refField"),
    ("read_only", "readonly"),
];

/// Translate one override key. Unrecognised keys pass through unchanged.
pub fn rename_key(key: &str) -> &str {
    KEY_RENAMES
        .iter()
        .find(|(host, _)| *host == key)
        .map_or(key, |(_, canonical)| *canonical)
}

/// Translate a whole override mapping.
///
/// `blank` is the inverse of `required`, so a boolean value is negated along
/// with the rename.
pub fn translate_overrides(attrs: &AttributeMap) -> AttributeMap {
    attrs
        .iter()
        .map(|(key, value)| {
            let value = match (key.as_str(), value) {
                ("blank", Value::Bool(blank)) => Value::Bool(!blank),
                _ => value.clone(),
            };
            (rename_key(key).to_string(), value)
        })
        .collect()
}

/// Overrides declared by `model` for `field_name`, translated.
///
/// A model without declarations, or without an entry for the field, yields
/// an empty mapping.
pub fn resolve_overrides(model: &ModelInfo, field_name: &str) -> AttributeMap {
    model
        .model_config()
        .overrides_for(field_name)
        .map(translate_overrides)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemabone_core::ModelConfig;
    use serde_json::json;

    fn attrs(value: Value) -> AttributeMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_rename_key() {
        assert_eq!(rename_key("verbose_name"), "displayName");
        assert_eq!(rename_key("max_digits"), "maxDigits");
        assert_eq!(rename_key("widget"), "widget");
        assert_eq!(rename_key("displayName"), "displayName");
    }

    #[test]
    fn test_blank_is_negated() {
        let translated = translate_overrides(&attrs(json!({"blank": true})));
        assert_eq!(Value::Object(translated), json!({"required": false}));
    }

    #[test]
    fn test_resolve_overrides() {
        let model = ModelInfo::new("shop", "order").config(ModelConfig::new().field_config(
            "status",
            attrs(json!({"verbose_name": "State", "widget": "select"})),
        ));

        let resolved = resolve_overrides(&model, "status");
        assert_eq!(
            Value::Object(resolved),
            json!({"displayName": "State", "widget": "select"})
        );
        assert!(resolve_overrides(&model, "total").is_empty());
    }

    #[test]
    fn test_model_without_config_yields_empty() {
        let model = ModelInfo::new("shop", "order");
        assert!(resolve_overrides(&model, "status").is_empty());
    }
}
