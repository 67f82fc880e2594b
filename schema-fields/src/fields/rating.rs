//! Rating field - star rating input.

use serde_json::{Map, Value};

use crate::node::Node;

use super::{FieldContext, FieldRegistration, FormField};

/// Registry key.
pub const RATING: &str = "rating";

/// Star count when the schema does not set `count`.
pub const DEFAULT_COUNT: u32 = 5;

fn create() -> Box<dyn FormField> {
    Box::new(RatingField)
}

inventory::submit! {
    FieldRegistration::new(RATING, create)
}

/// The `rating` field.
///
/// Maps the component props onto a rating node: `count` and `allowHalf`
/// are read, everything else (`className`, `style`, ...) is passed through.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingField;

impl FormField for RatingField {
    fn name(&self) -> &'static str {
        RATING
    }

    fn render(&self, cx: &FieldContext<'_>) -> Node {
        let mut props = cx.schema.extends_component_props();
        let count = take_count(&mut props);
        let allow_half = props
            .remove("allowHalf")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        let value = cx.value.as_f64().unwrap_or(0.0).clamp(0.0, f64::from(count));

        Node::Rating {
            path: cx.path.clone(),
            value,
            count,
            allow_half,
            disabled: !cx.editable,
            props,
        }
    }
}

fn take_count(props: &mut Map<String, Value>) -> u32 {
    match props.remove("count") {
        None | Some(Value::Null) => DEFAULT_COUNT,
        Some(value) => match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
            Some(count) if count > 0 => count,
            _ => {
                log::warn!("ignoring rating count {}; using {}", value, DEFAULT_COUNT);
                DEFAULT_COUNT
            }
        },
    }
}
