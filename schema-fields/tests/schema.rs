use schema_fields::error::SchemaError;
use schema_fields::schema::{ArrayItems, Schema};
use serde_json::json;

#[test]
fn test_properties_keep_declaration_order() {
    let schema = Schema::from_value(&json!({
        "type": "object",
        "properties": {
            "zeta": { "type": "string" },
            "alpha": { "type": "number" },
            "mid": { "type": "boolean" }
        }
    }))
    .unwrap();
    let keys: Vec<&str> = schema.properties.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_single_items() {
    let schema = Schema::from_value(&json!({ "type": "array", "items": { "type": "string" } }))
        .unwrap();
    match &schema.items {
        Some(ArrayItems::Single(item)) => assert_eq!(item.kind.as_deref(), Some("string")),
        other => panic!("unexpected items: {:?}", other),
    }
}

#[test]
fn test_tuple_items_overflow_to_last() {
    let schema = Schema::from_value(&json!({
        "type": "array",
        "items": [{ "type": "string" }, { "type": "number" }]
    }))
    .unwrap();
    let items = schema.items.as_ref().unwrap();
    assert_eq!(items.position_for(0), Some(0));
    assert_eq!(items.position_for(1), Some(1));
    assert_eq!(items.position_for(7), Some(1));
    assert_eq!(items.schema_for(2).unwrap().kind.as_deref(), Some("number"));
    assert_eq!(items.template().unwrap().kind.as_deref(), Some("number"));
}

#[test]
fn test_empty_tuple_has_no_template() {
    let schema = Schema::from_value(&json!({ "type": "array", "items": [] })).unwrap();
    let items = schema.items.as_ref().unwrap();
    assert_eq!(items.position_for(0), None);
    assert!(items.template().is_none());
}

#[test]
fn test_bounds() {
    let schema = Schema::from_value(&json!({ "minItems": 1, "maxItems": 3 })).unwrap();
    assert_eq!(schema.min_items, Some(1));
    assert_eq!(schema.max_items, Some(3));
}

#[test]
fn test_invalid_bound() {
    let err = Schema::from_value(&json!({ "maxItems": -2 })).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidBound { keyword: "maxItems", .. }));
}

#[test]
fn test_invalid_items() {
    let err = Schema::from_value(&json!({ "items": "string" })).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidItems { actual: "string", .. }));
}

#[test]
fn test_nested_error_reports_location() {
    let err = Schema::from_value(&json!({
        "properties": { "tags": { "items": [{ "type": "string" }, 3] } }
    }))
    .unwrap_err();
    assert_eq!(
        err,
        SchemaError::NotAnObject {
            at: "#/properties/tags/items/1".to_string(),
            actual: "number",
        }
    );
}

#[test]
fn test_empty_values() {
    let empty = |v| Schema::from_value(&v).unwrap().empty_value();
    assert_eq!(empty(json!({ "type": "string" })), json!(""));
    assert_eq!(empty(json!({ "type": "array" })), json!([]));
    assert_eq!(empty(json!({ "type": "object" })), json!({}));
    assert_eq!(empty(json!({ "type": "number" })), json!(null));
    assert_eq!(empty(json!({ "type": "string", "default": "n/a" })), json!("n/a"));
}

#[test]
fn test_field_type_prefers_x_component() {
    let schema = Schema::from_value(&json!({ "type": "array", "x-component": "table" })).unwrap();
    assert_eq!(schema.field_type(), Some("table"));
    assert_eq!(Schema::of_type("number").field_type(), Some("number"));
}

#[test]
fn test_component_props_layer_over_x_props() {
    let schema = Schema::from_value(&json!({
        "x-props": { "size": "small", "bordered": true },
        "x-component-props": { "size": "large" }
    }))
    .unwrap();
    let props = schema.extends_component_props();
    assert_eq!(props.get("size"), Some(&json!("large")));
    assert_eq!(props.get("bordered"), Some(&json!(true)));
}

#[test]
fn test_title_and_description() {
    let schema = Schema::from_value(&json!({
        "type": "string",
        "title": "Name",
        "description": "Full name"
    }))
    .unwrap();
    assert_eq!(schema.title.as_deref(), Some("Name"));
    assert_eq!(schema.description.as_deref(), Some("Full name"));
}
