mod fixtures;

use fixtures::*;
use schemabone::prelude::*;
use schemabone::export_schema_json;
use serde_json::{Value, json};

fn export() -> SchemaRegistry {
    export_schema(&apps(), &options(), &computed())
}

fn field_names(entry: &SchemaEntry) -> Vec<&str> {
    entry.fields.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn export_covers_every_model_of_listed_groups() {
    let registry = export();
    let ids: Vec<_> = registry.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["crm__customer", "shop__order", "shop__tag"]);
}

#[test]
fn native_descriptors_carry_common_keys() {
    let registry = export();
    for (_, entry) in registry.iter() {
        for field in entry.fields.iter().filter(|f| f.primary_key.is_some()) {
            let value = serde_json::to_value(field).unwrap();
            for key in ["name", "displayName", "required", "type"] {
                assert!(value.get(key).is_some(), "{} lacks {key}", field.name);
            }
        }
    }

    let order = registry.get("shop__order").unwrap();
    assert_eq!(order.field("id").unwrap().field_type, "integer");
    assert_eq!(order.field("status").unwrap().field_type, "string");
    assert_eq!(order.field("total").unwrap().field_type, "decimal");
    assert_eq!(order.field("notes").unwrap().field_type, "richtext");
    assert_eq!(order.field("placed_at").unwrap().field_type, "datetime");
}

#[test]
fn export_is_idempotent() {
    let first = export();
    let second = export();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn override_wins_over_computed_label() {
    let registry = export();
    let customer = registry.get("crm__customer").unwrap();
    assert_eq!(customer.field("name").unwrap().display_name, "Full name");
    assert_eq!(customer.field("orders").unwrap().display_name, "Orders placed");
}

#[test]
fn many_to_many_yields_mref_on_target() {
    let registry = export();
    let tag = registry.get("shop__tag").unwrap();
    let reverse = tag.field("order").unwrap();
    assert_eq!(
        serde_json::to_value(reverse).unwrap(),
        json!({
            "name": "order",
            "displayName": "Order",
            "required": false,
            "type": "mref",
            "ref": "shop__order",
            "refField": "tags"
        })
    );

    let order = registry.get("shop__order").unwrap();
    let forward = order.field("tags").unwrap();
    assert_eq!(forward.field_type, "mref");
    assert_eq!(forward.reference.as_deref(), Some("shop__tag"));
    assert_eq!(forward.ref_field.as_deref(), Some("order"));
}

#[test]
fn foreign_key_yields_bref_on_target() {
    let registry = export();
    let customer = registry.get("crm__customer").unwrap();
    let orders = customer.field("orders").unwrap();
    assert_eq!(orders.field_type, "bref");
    assert_eq!(orders.reference.as_deref(), Some("shop__order"));
    assert_eq!(orders.ref_field.as_deref(), Some("customer"));

    let order = registry.get("shop__order").unwrap();
    let forward = order.field("customer").unwrap();
    assert_eq!(forward.reference.as_deref(), Some("crm__customer"));
    assert_eq!(forward.ref_field.as_deref(), Some("orders"));
}

#[test]
fn validators_are_translated() {
    let registry = export();
    let order = registry.get("shop__order").unwrap();
    assert_eq!(
        order.field("quantity").unwrap().get("validators"),
        Some(json!([{"type": "min_value", "value": 5}]))
    );

    let tag = registry.get("shop__tag").unwrap();
    assert_eq!(
        tag.field("label").unwrap().get("validators"),
        Some(json!([{"type": "slug"}]))
    );
}

#[test]
fn unsupported_field_type_is_dropped() {
    let registry = export();
    let customer = registry.get("crm__customer").unwrap();
    let declared = customer_native_count();
    let exported = customer
        .fields
        .iter()
        .filter(|f| f.primary_key.is_some())
        .count();
    assert_eq!(exported, declared - 1);
    assert!(customer.field("location").is_none());
}

fn customer_native_count() -> usize {
    fixtures::customer().fields().len()
}

#[test]
fn unresolvable_relation_target_is_dropped() {
    let registry = export();
    let order = registry.get("shop__order").unwrap();
    assert!(order.field("warehouse").is_none());
    assert!(order.field("total").is_some());
}

#[test]
fn defaults_are_materialized_or_omitted() {
    let registry = export();
    let order = registry.get("shop__order").unwrap();
    assert_eq!(order.field("status").unwrap().default, Some(json!("new")));
    assert_eq!(order.field("quantity").unwrap().default, Some(json!(1)));
    assert_eq!(order.field("extras").unwrap().default, Some(json!("none")));
    assert!(order.field("placed_at").unwrap().get("default").is_none());
}

#[test]
fn computed_fields_follow_native_and_reverse() {
    let registry = export();
    let customer = registry.get("crm__customer").unwrap();
    assert_eq!(
        field_names(customer),
        vec!["id", "name", "email", "orders", "age", "order_count"]
    );
    assert_eq!(
        serde_json::to_value(customer.field("age").unwrap()).unwrap(),
        json!({
            "name": "age",
            "displayName": "age",
            "required": false,
            "type": "Integer",
            "readonly": true
        })
    );

    let order = registry.get("shop__order").unwrap();
    let summary = order.fields.last().unwrap();
    assert_eq!(summary.name, "summary");
    assert_eq!(summary.display_name, "Summary");
    assert_eq!(summary.readonly, Some(true));
}

#[test]
fn entry_metadata() {
    let registry = export();
    let customer = registry.get("crm__customer").unwrap();
    assert_eq!(customer.display_name, "Customer");
    assert_eq!(customer.title_field, "name");

    let order = registry.get("shop__order").unwrap();
    assert_eq!(order.title_field, "id");
    assert!(order.validators.is_none());
}

#[test]
fn json_output_is_an_object_keyed_by_identity() {
    let json = export_schema_json(&apps(), &options(), &computed()).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["crm__customer", "shop__order", "shop__tag"]);
    assert_eq!(value["shop__order"]["fields"][5]["precision"], json!(2));
    assert_eq!(value["shop__order"]["fields"][5]["maxDigits"], json!(12));
    assert_eq!(value["crm__customer"]["fields"][0]["editable"], json!(false));
}

#[test]
fn options_loaded_from_json_drive_the_export() {
    let options = ExportOptions::from_json(r#"{"groups": ["shop"]}"#).unwrap();
    let registry = export_schema(&apps(), &options, &ComputedRegistry::new());
    assert_eq!(registry.len(), 2);
    assert!(registry.get("crm__customer").is_none());

    // Reverse relations still see models outside the exported groups.
    let tag = registry.get("shop__tag").unwrap();
    assert!(tag.field("order").is_some());
}
