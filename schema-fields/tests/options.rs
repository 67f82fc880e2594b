use schema_fields::node::Node;
use schema_fields::options::{SlotRender, TableOptions};
use serde_json::json;

#[test]
fn test_recognized_keys_are_split_out() {
    let props = json!({
        "renderAddition": "Add user",
        "renderRemove": "x",
        "renderExtraOperations": "copy",
        "operationsWidth": 150,
        "operations": { "title": "Ops" },
        "dragable": true,
        "bordered": true,
        "size": "small"
    });
    let options = TableOptions::from_props(props.as_object().unwrap());

    assert_eq!(options.operations_width(), 150);
    assert!(options.dragable);
    assert_eq!(options.operations.get("title"), Some(&json!("Ops")));
    assert_eq!(
        options.render_addition.as_ref().map(|s| s.render(0)),
        Some(Node::text("Add user"))
    );
    assert_eq!(
        options.render_extra_operations.as_ref().map(|s| s.render(3)),
        Some(Node::text("copy"))
    );
    let passthrough: Vec<&str> = options.component_props.keys().map(String::as_str).collect();
    assert_eq!(passthrough, vec!["bordered", "size"]);
}

#[test]
fn test_malformed_values_are_ignored() {
    let props = json!({
        "operationsWidth": "wide",
        "operations": 3,
        "renderEmpty": { "nested": true }
    });
    let options = TableOptions::from_props(props.as_object().unwrap());

    assert_eq!(options.operations_width(), 200);
    assert!(options.operations.is_empty());
    assert!(options.render_empty.is_none());
    assert!(options.component_props.is_empty());
}

#[test]
fn test_overrides_replace_schema_slots() {
    let props = json!({ "renderExtraOperations": "static", "dragable": false });
    let schema_options = TableOptions::from_props(props.as_object().unwrap());
    let overrides = TableOptions::default()
        .extra_operations(SlotRender::per_row(|i| Node::text(format!("row {}", i))))
        .dragable();

    let options = schema_options.with_overrides(&overrides);

    assert!(options.dragable);
    assert_eq!(
        options.render_extra_operations.as_ref().map(|s| s.render(2)),
        Some(Node::text("row 2"))
    );
}

#[test]
fn test_zero_operations_width_falls_back_to_default() {
    let props = json!({ "operationsWidth": 0 });
    let options = TableOptions::from_props(props.as_object().unwrap());
    assert_eq!(options.operations_width(), 200);
}
