//! Translation of native validators into portable rules.
//!
//! Each native validator is looked up by its fully-qualified identity. Known
//! identities map to a [`ValidatorKind`]; identities mapped to `None` are
//! recognised but have no portable form, and unknown identities are ignored.

use schemabone_core::{FieldInfo, NativeValidator, ValidatorArgs, validate_pattern};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of a portable validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    Regex,
    Email,
    Url,
    Slug,
    UnicodeSlug,
    Ip,
    MaxValue,
    MinValue,
}

/// Native validator identity → portable kind (`None` = unsupported).
const VALIDATOR_MAP: &[(&str, Option<ValidatorKind>)] = &[
    ("django.core.validators.RegexValidator", Some(ValidatorKind::Regex)),
    ("django.core.validators.EmailValidator", Some(ValidatorKind::Email)),
    ("django.core.validators.URLValidator", Some(ValidatorKind::Url)),
    ("django.core.validators.validate_slug", Some(ValidatorKind::Slug)),
    (
        "django.core.validators.validate_unicode_slug",
        Some(ValidatorKind::UnicodeSlug),
    ),
    ("django.core.validators.validate_ipv4_address", Some(ValidatorKind::Ip)),
    ("django.core.validators.validate_ipv6_address", Some(ValidatorKind::Ip)),
    ("django.core.validators.validate_ipv46_address", Some(ValidatorKind::Ip)),
    ("django.core.validators.MaxValueValidator", Some(ValidatorKind::MaxValue)),
    ("django.core.validators.MinValueValidator", Some(ValidatorKind::MinValue)),
    ("django.core.validators.MaxLengthValidator", None),
    ("django.core.validators.MinLengthValidator", None),
    ("django.core.validators.FileExtensionValidator", None),
    ("django.core.validators.ProhibitNullCharactersValidator", None),
];

impl ValidatorKind {
    /// Look up a native validator identity.
    ///
    /// Returns `None` both for unknown identities and for identities marked
    /// as unsupported.
    pub fn from_identity(identity: &str) -> Option<Self> {
        VALIDATOR_MAP
            .iter()
            .find(|(native, _)| *native == identity)
            .and_then(|(_, kind)| *kind)
    }
}

/// A portable validation rule.
///
/// Serializes as `{"type": "<kind>", ...params}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidatorRule {
    Regex {
        regex: String,
        inverse_match: bool,
        flags: u32,
    },
    Email,
    Url,
    Slug,
    UnicodeSlug,
    Ip,
    MaxValue {
        value: Value,
    },
    MinValue {
        value: Value,
    },
}

impl ValidatorRule {
    /// The kind of this rule.
    pub const fn kind(&self) -> ValidatorKind {
        match self {
            ValidatorRule::Regex { .. } => ValidatorKind::Regex,
            ValidatorRule::Email => ValidatorKind::Email,
            ValidatorRule::Url => ValidatorKind::Url,
            ValidatorRule::Slug => ValidatorKind::Slug,
            ValidatorRule::UnicodeSlug => ValidatorKind::UnicodeSlug,
            ValidatorRule::Ip => ValidatorKind::Ip,
            ValidatorRule::MaxValue { .. } => ValidatorKind::MaxValue,
            ValidatorRule::MinValue { .. } => ValidatorKind::MinValue,
        }
    }
}

/// Translate a single native validator.
pub fn translate_validator(validator: &NativeValidator) -> Option<ValidatorRule> {
    let Some(kind) = ValidatorKind::from_identity(&validator.identity) else {
        tracing::debug!(
            validator = %validator.identity,
            "Validator has no portable form, skipping"
        );
        return None;
    };

    let rule = match (kind, &validator.args) {
        (ValidatorKind::Email, _) => ValidatorRule::Email,
        (ValidatorKind::Url, _) => ValidatorRule::Url,
        (ValidatorKind::Slug, _) => ValidatorRule::Slug,
        (ValidatorKind::UnicodeSlug, _) => ValidatorRule::UnicodeSlug,
        (ValidatorKind::Ip, _) => ValidatorRule::Ip,
        (ValidatorKind::MaxValue, ValidatorArgs::Limit(value)) => ValidatorRule::MaxValue {
            value: value.clone(),
        },
        (ValidatorKind::MinValue, ValidatorArgs::Limit(value)) => ValidatorRule::MinValue {
            value: value.clone(),
        },
        (
            ValidatorKind::Regex,
            ValidatorArgs::Regex {
                pattern,
                inverse_match,
                flags,
            },
        ) => {
            if let Some(message) = validate_pattern(pattern) {
                tracing::warn!(
                    validator = %validator.identity,
                    pattern = pattern.as_str(),
                    error = message.as_str(),
                    "Exporting regex validator whose pattern does not compile"
                );
            }
            ValidatorRule::Regex {
                regex: pattern.clone(),
                inverse_match: *inverse_match,
                flags: *flags,
            }
        }
        (kind, args) => {
            tracing::debug!(
                validator = %validator.identity,
                kind = ?kind,
                args = ?args,
                "Validator is missing its arguments, skipping"
            );
            return None;
        }
    };
    Some(rule)
}

/// Translate every validator of `field`, in declaration order.
pub fn translate(field: &FieldInfo) -> Vec<ValidatorRule> {
    field
        .validators
        .iter()
        .filter_map(translate_validator)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PREFIX: &str = "django.core.validators";

    fn qualified(name: &str) -> String {
        format!("{PREFIX}.{name}")
    }

    #[test]
    fn test_min_value_copies_limit() {
        let field = FieldInfo::new("qty", "IntegerField")
            .validator(NativeValidator::with_limit(qualified("MinValueValidator"), 5));
        let rules = translate(&field);
        assert_eq!(rules, vec![ValidatorRule::MinValue { value: json!(5) }]);
        assert_eq!(
            serde_json::to_value(&rules[0]).unwrap(),
            json!({"type": "min_value", "value": 5})
        );
    }

    #[test]
    fn test_regex_copies_pattern_and_flags() {
        let field = FieldInfo::new("code", "CharField").validator(NativeValidator::with_regex(
            qualified("RegexValidator"),
            "^[A-Z]{3}$",
            true,
            2,
        ));
        let rules = translate(&field);
        assert_eq!(
            serde_json::to_value(&rules).unwrap(),
            json!([{"type": "regex", "regex": "^[A-Z]{3}$", "inverse_match": true, "flags": 2}])
        );
    }

    #[test]
    fn test_unsupported_and_unknown_validators_are_dropped() {
        let field = FieldInfo::new("upload", "FileField")
            .validator(NativeValidator::new(qualified("FileExtensionValidator")))
            .validator(NativeValidator::new("myapp.validators.no_swearing"));
        assert!(translate(&field).is_empty());
    }

    #[test]
    fn test_missing_limit_is_dropped() {
        let field = FieldInfo::new("qty", "IntegerField")
            .validator(NativeValidator::new(qualified("MaxValueValidator")));
        assert!(translate(&field).is_empty());
    }

    #[test]
    fn test_order_is_preserved_without_dedup() {
        let field = FieldInfo::new("site", "URLField")
            .validator(NativeValidator::qualified(PREFIX, "URLValidator"))
            .validator(NativeValidator::qualified(PREFIX, "validate_slug"))
            .validator(NativeValidator::qualified(PREFIX, "URLValidator"));
        let kinds: Vec<_> = translate(&field).iter().map(ValidatorRule::kind).collect();
        assert_eq!(
            kinds,
            vec![ValidatorKind::Url, ValidatorKind::Slug, ValidatorKind::Url]
        );
    }

    #[test]
    fn test_invalid_regex_is_still_exported() {
        let validator =
            NativeValidator::with_regex(qualified("RegexValidator"), "[unclosed", false, 0);
        assert!(matches!(
            translate_validator(&validator),
            Some(ValidatorRule::Regex { .. })
        ));
    }

    #[test]
    fn test_ip_variants_share_a_kind() {
        for name in [
            "validate_ipv4_address",
            "validate_ipv6_address",
            "validate_ipv46_address",
        ] {
            assert_eq!(
                ValidatorKind::from_identity(&qualified(name)),
                Some(ValidatorKind::Ip)
            );
        }
    }
}
