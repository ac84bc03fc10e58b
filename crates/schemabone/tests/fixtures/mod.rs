//! Test fixtures for schemabone integration tests.

#![allow(dead_code)]

use schemabone::prelude::*;
use serde_json::{Value, json};

pub const VALIDATORS: &str = "django.core.validators";

pub fn attrs(value: Value) -> AttributeMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

pub struct Tag;

impl Model for Tag {
    fn model_info() -> ModelInfo {
        ModelInfo::new("shop", "tag")
            .verbose_name("Tag")
            .field(FieldInfo::new("id", "AutoField").primary_key(true))
            .field(FieldInfo::new("label", "SlugField").max_length(50).validator(
                NativeValidator::qualified(VALIDATORS, "validate_slug"),
            ))
    }
}

pub fn customer() -> ModelInfo {
    ModelInfo::new("crm", "customer")
        .verbose_name("Customer")
        .field(FieldInfo::new("id", "AutoField").primary_key(true).editable(false))
        .field(
            FieldInfo::new("name", "CharField")
                .verbose_name("Name")
                .max_length(80),
        )
        .field(
            FieldInfo::new("email", "EmailField")
                .max_length(254)
                .blank(true)
                .validator(NativeValidator::qualified(VALIDATORS, "EmailValidator")),
        )
        .field(FieldInfo::new("location", "PointField"))
        .config(
            ModelConfig::new()
                .title_field("name")
                .field_config("name", attrs(json!({"verbose_name": "Full name"})))
                .field_config("orders", attrs(json!({"verbose_name": "Orders placed"})))
                .computed_field(ComputedField::new("age", "Integer"))
                .annotated_field(
                    "order_count",
                    annotation("Count('orders')", "integer"),
                ),
        )
}

pub fn order() -> ModelInfo {
    ModelInfo::new("shop", "order")
        .verbose_name("Order")
        .field(FieldInfo::new("id", "AutoField").primary_key(true))
        .field(
            FieldInfo::new("customer", "ForeignKey").relation(
                RelationInfo::many_to_one(ModelKey::new("crm", "customer")).related_name("orders"),
            ),
        )
        .field(
            FieldInfo::new("tags", "ManyToManyField")
                .blank(true)
                .relation(RelationInfo::many_to_many(ModelKey::new("shop", "tag"))),
        )
        .field(
            FieldInfo::new("status", "CharField")
                .max_length(10)
                .choices(vec![Choice::new("new", "New"), Choice::new("paid", "Paid")])
                .default_value("new"),
        )
        .field(
            FieldInfo::new("quantity", "PositiveIntegerField")
                .default_value(1)
                .validator(NativeValidator::with_limit(
                    format!("{VALIDATORS}.MinValueValidator"),
                    5,
                ))
                .validator(NativeValidator::new(format!(
                    "{VALIDATORS}.FileExtensionValidator"
                ))),
        )
        .field(FieldInfo::new("total", "DecimalField").decimal(12, 2))
        .field(FieldInfo::new("notes", "TextField").type_hint("BoneRichTextField"))
        .field(
            FieldInfo::new("placed_at", "DateTimeField").default(DefaultSpec::Deferred),
        )
        .field(
            FieldInfo::new("extras", "CharField")
                .max_length(20)
                .default(DefaultSpec::Factory(|| json!("none"))),
        )
        .field(
            FieldInfo::new("warehouse", "ForeignKey")
                .relation(RelationInfo::many_to_one(ModelKey::new("stock", "warehouse"))),
        )
}

pub fn apps() -> AppRegistry {
    let mut apps = AppRegistry::new();
    apps.register(customer()).unwrap();
    apps.register(order()).unwrap();
    apps.register_model::<Tag>().unwrap();
    apps
}

pub fn computed() -> ComputedRegistry {
    ComputedRegistry::new().with(
        ModelKey::new("shop", "order"),
        "summary",
        ComputedAccessor::new("string", "Summary"),
    )
}

pub fn options() -> ExportOptions {
    ExportOptions::new(["crm", "shop"])
}
