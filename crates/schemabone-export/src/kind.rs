//! Canonical field kinds and the native type table.

use schemabone_core::FieldInfo;

/// Portable field kind, independent of any data-model implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalFieldKind {
    Integer,
    Bool,
    String,
    Text,
    Date,
    DateTime,
    Time,
    Float,
    Decimal,
    Ref,
    RefMult,
    RichText,
    Image,
    File,
}

/// Native type tag → canonical kind.
const NATIVE_TYPES: &[(&str, CanonicalFieldKind)] = &[
    ("AutoField", CanonicalFieldKind::Integer),
    ("BigAutoField", CanonicalFieldKind::Integer),
    ("SmallAutoField", CanonicalFieldKind::Integer),
    ("IntegerField", CanonicalFieldKind::Integer),
    ("BigIntegerField", CanonicalFieldKind::Integer),
    ("SmallIntegerField", CanonicalFieldKind::Integer),
    ("PositiveIntegerField", CanonicalFieldKind::Integer),
    ("PositiveSmallIntegerField", CanonicalFieldKind::Integer),
    ("PositiveBigIntegerField", CanonicalFieldKind::Integer),
    ("BooleanField", CanonicalFieldKind::Bool),
    ("NullBooleanField", CanonicalFieldKind::Bool),
    ("CharField", CanonicalFieldKind::String),
    ("SlugField", CanonicalFieldKind::String),
    ("EmailField", CanonicalFieldKind::String),
    ("GenericIPAddressField", CanonicalFieldKind::String),
    ("URLField", CanonicalFieldKind::String),
    ("UUIDField", CanonicalFieldKind::String),
    ("TextField", CanonicalFieldKind::Text),
    ("DateField", CanonicalFieldKind::Date),
    ("DateTimeField", CanonicalFieldKind::DateTime),
    ("TimeField", CanonicalFieldKind::Time),
    ("FloatField", CanonicalFieldKind::Float),
    ("DecimalField", CanonicalFieldKind::Decimal),
    ("ForeignKey", CanonicalFieldKind::Ref),
    ("OneToOneField", CanonicalFieldKind::Ref),
    ("ManyToManyField", CanonicalFieldKind::RefMult),
    ("BoneRichTextField", CanonicalFieldKind::RichText),
    ("BoneImageUrlField", CanonicalFieldKind::Image),
    ("ImageField", CanonicalFieldKind::Image),
    ("BoneFileUrlField", CanonicalFieldKind::File),
    ("FileField", CanonicalFieldKind::File),
];

impl CanonicalFieldKind {
    /// Every kind, in table order.
    pub const ALL: [CanonicalFieldKind; 14] = [
        CanonicalFieldKind::Integer,
        CanonicalFieldKind::Bool,
        CanonicalFieldKind::String,
        CanonicalFieldKind::Text,
        CanonicalFieldKind::Date,
        CanonicalFieldKind::DateTime,
        CanonicalFieldKind::Time,
        CanonicalFieldKind::Float,
        CanonicalFieldKind::Decimal,
        CanonicalFieldKind::Ref,
        CanonicalFieldKind::RefMult,
        CanonicalFieldKind::RichText,
        CanonicalFieldKind::Image,
        CanonicalFieldKind::File,
    ];

    /// Exported type name.
    pub const fn display_name(self) -> &'static str {
        match self {
            CanonicalFieldKind::Integer => "integer",
            CanonicalFieldKind::Bool => "bool",
            CanonicalFieldKind::String => "string",
            CanonicalFieldKind::Text => "text",
            CanonicalFieldKind::Date => "date",
            CanonicalFieldKind::DateTime => "datetime",
            CanonicalFieldKind::Time => "time",
            CanonicalFieldKind::Float => "float",
            CanonicalFieldKind::Decimal => "decimal",
            CanonicalFieldKind::Ref => "ref",
            CanonicalFieldKind::RefMult => "mref",
            CanonicalFieldKind::RichText => "richtext",
            CanonicalFieldKind::Image => "image",
            CanonicalFieldKind::File => "file",
        }
    }

    /// Look up a native type tag.
    pub fn from_native(tag: &str) -> Option<Self> {
        NATIVE_TYPES
            .iter()
            .find(|(native, _)| *native == tag)
            .map(|(_, kind)| *kind)
    }
}

/// Classify a native field.
///
/// The framework-specific type hint wins over the primary type tag. Unknown
/// tags yield `None` and the field is left out of the schema.
pub fn classify(field: &FieldInfo) -> Option<CanonicalFieldKind> {
    CanonicalFieldKind::from_native(field.effective_type())
}
