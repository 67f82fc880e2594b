use schema_fields::fields::rating::RatingField;
use schema_fields::fields::{FieldContext, FieldDispatch, FormField};
use schema_fields::mutators::ArrayMutators;
use schema_fields::node::Node;
use schema_fields::path::FieldPath;
use schema_fields::schema::Schema;
use schema_fields::value::FormState;
use serde_json::{Value, json};

struct NoDispatch;

impl FieldDispatch for NoDispatch {
    fn render_field(&self, _schema: &Schema, _path: &FieldPath) -> Node {
        Node::Empty
    }
}

fn render(schema: Value, value: Value, editable: bool) -> Node {
    let schema = Schema::from_value(&schema).unwrap();
    let path = FieldPath::parse("score");
    let form = FormState::default();
    let mutators = form.array(path.clone());
    let mutators: &dyn ArrayMutators = &mutators;
    let cx = FieldContext {
        schema: &schema,
        path: &path,
        value: &value,
        editable,
        mutators,
        dispatch: &NoDispatch,
    };
    RatingField.render(&cx)
}

#[test]
fn test_defaults() {
    match render(json!({ "type": "number" }), json!(3), true) {
        Node::Rating {
            value,
            count,
            allow_half,
            disabled,
            ..
        } => {
            assert_eq!(value, 3.0);
            assert_eq!(count, 5);
            assert!(!allow_half);
            assert!(!disabled);
        }
        other => panic!("expected a rating, got {:?}", other),
    }
}

#[test]
fn test_component_props_mapped() {
    let schema = json!({
        "type": "number",
        "x-component-props": { "count": 10, "allowHalf": true, "className": "stars" }
    });
    match render(schema, json!(12), false) {
        Node::Rating {
            value,
            count,
            allow_half,
            disabled,
            props,
            ..
        } => {
            assert_eq!(count, 10);
            assert_eq!(value, 10.0);
            assert!(allow_half);
            assert!(disabled);
            assert_eq!(props.get("className"), Some(&json!("stars")));
            assert!(props.get("count").is_none());
        }
        other => panic!("expected a rating, got {:?}", other),
    }
}

#[test]
fn test_invalid_count_falls_back() {
    let schema = json!({ "type": "number", "x-component-props": { "count": "many" } });
    assert!(matches!(
        render(schema, json!(null), true),
        Node::Rating { count: 5, value, .. } if value == 0.0
    ));
}
