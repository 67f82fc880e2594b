//! Ordered props merge.
//!
//! Display props come from several layers. Layers are applied lowest
//! precedence first; a later layer replaces earlier values key by key.
//! Nested objects are replaced, not deep-merged.

use serde_json::{Map, Value};

/// Props layers in precedence order.
#[derive(Debug, Clone, Default)]
pub struct PropLayers<'a> {
    layers: Vec<&'a Map<String, Value>>,
}

impl<'a> PropLayers<'a> {
    /// Start with computed defaults (lowest precedence).
    pub fn new(defaults: &'a Map<String, Value>) -> Self {
        Self {
            layers: vec![defaults],
        }
    }

    /// Add a layer that takes precedence over every layer added before it.
    pub fn over(mut self, layer: &'a Map<String, Value>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Flatten the layers.
    pub fn merge(&self) -> Map<String, Value> {
        let mut merged = Map::new();
        for layer in &self.layers {
            for (key, value) in layer.iter() {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

/// Read a string prop.
pub fn str_prop<'m>(props: &'m Map<String, Value>, key: &str) -> Option<&'m str> {
    props.get(key).and_then(Value::as_str)
}

/// Read a width prop. Accepts non-negative integers that fit in `u16`.
pub fn width_prop(props: &Map<String, Value>, key: &str) -> Option<u16> {
    props
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|w| u16::try_from(w).ok())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_later_layer_wins() {
        let defaults = map(json!({ "title": "Name", "align": "left" }));
        let item = map(json!({ "align": "center", "width": 80 }));
        let column = map(json!({ "width": 120 }));

        let merged = PropLayers::new(&defaults).over(&item).over(&column).merge();

        assert_eq!(merged.get("title"), Some(&json!("Name")));
        assert_eq!(merged.get("align"), Some(&json!("center")));
        assert_eq!(merged.get("width"), Some(&json!(120)));
    }

    #[test]
    fn test_merge_keeps_first_seen_key_order() {
        let defaults = map(json!({ "a": 1, "b": 2 }));
        let over = map(json!({ "c": 3, "a": 4 }));
        let merged = PropLayers::new(&defaults).over(&over).merge();
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_width_prop_rejects_non_integers() {
        let props = map(json!({ "w1": 200, "w2": "wide", "w3": -1, "w4": 100000 }));
        assert_eq!(width_prop(&props, "w1"), Some(200));
        assert_eq!(width_prop(&props, "w2"), None);
        assert_eq!(width_prop(&props, "w3"), None);
        assert_eq!(width_prop(&props, "w4"), None);
    }
}
