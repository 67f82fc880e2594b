//! Schema node model.
//!
//! A [`Schema`] is parsed from a JSON-Schema-like document. Only the parts
//! the field renderers read are modelled: type, title, properties (in
//! declaration order), array items and bounds, defaults, and the `x-*`
//! extension props.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SchemaError;

/// Array item description.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayItems {
    /// One schema shared by every position.
    Single(Box<Schema>),
    /// One schema per fixed position.
    Tuple(Vec<Schema>),
}

impl ArrayItems {
    /// Item schemas in positional order.
    pub fn positions(&self) -> Vec<&Schema> {
        match self {
            ArrayItems::Single(schema) => vec![schema.as_ref()],
            ArrayItems::Tuple(schemas) => schemas.iter().collect(),
        }
    }

    /// The item position governing row `index`.
    ///
    /// Rows past the end of a tuple fall back to its last position. Returns
    /// `None` only for an empty tuple.
    pub fn position_for(&self, index: usize) -> Option<usize> {
        match self {
            ArrayItems::Single(_) => Some(0),
            ArrayItems::Tuple(schemas) if schemas.is_empty() => None,
            ArrayItems::Tuple(schemas) => Some(index.min(schemas.len() - 1)),
        }
    }

    /// The schema governing row `index`.
    pub fn schema_for(&self, index: usize) -> Option<&Schema> {
        let position = self.position_for(index)?;
        match self {
            ArrayItems::Single(schema) => Some(schema),
            ArrayItems::Tuple(schemas) => schemas.get(position),
        }
    }

    /// Template schema for a newly added row.
    ///
    /// The last tuple entry for tuples, the shared schema otherwise.
    pub fn template(&self) -> Option<&Schema> {
        match self {
            ArrayItems::Single(schema) => Some(schema),
            ArrayItems::Tuple(schemas) => schemas.last(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<String>,
    description: Option<String>,
    default: Option<Value>,
    properties: Option<Map<String, Value>>,
    items: Option<Value>,
    min_items: Option<Value>,
    max_items: Option<Value>,
    #[serde(rename = "x-component")]
    x_component: Option<String>,
    #[serde(rename = "x-props")]
    x_props: Option<Map<String, Value>>,
    #[serde(rename = "x-item-props")]
    x_item_props: Option<Map<String, Value>>,
    #[serde(rename = "x-component-props")]
    x_component_props: Option<Map<String, Value>>,
}

/// A schema node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// Declared `type` (`string`, `number`, `object`, `array`, ...).
    pub kind: Option<String>,
    /// Display title.
    pub title: Option<String>,
    /// Description text.
    pub description: Option<String>,
    /// Declared default value.
    pub default: Option<Value>,
    /// Object properties in declaration order.
    pub properties: Vec<(String, Schema)>,
    /// Array items.
    pub items: Option<ArrayItems>,
    /// Lower bound on the array length.
    pub min_items: Option<usize>,
    /// Upper bound on the array length.
    pub max_items: Option<usize>,
    /// Explicit field type key.
    pub x_component: Option<String>,
    /// Column-level (field-level) extension props.
    pub x_props: Map<String, Value>,
    /// Item-level extension props.
    pub x_item_props: Map<String, Value>,
    /// Component-level extension props.
    pub x_component_props: Map<String, Value>,
}

impl Schema {
    /// Parse a schema from JSON.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        Self::parse_at(value, "#")
    }

    fn parse_at(value: &Value, at: &str) -> Result<Self, SchemaError> {
        if !value.is_object() {
            return Err(SchemaError::NotAnObject {
                at: at.to_string(),
                actual: json_kind(value),
            });
        }
        let raw = RawSchema::deserialize(value).map_err(|e| SchemaError::Malformed {
            at: at.to_string(),
            message: e.to_string(),
        })?;

        let mut properties = Vec::new();
        for (key, child) in raw.properties.unwrap_or_default() {
            let child_at = format!("{}/properties/{}", at, key);
            properties.push((key, Self::parse_at(&child, &child_at)?));
        }

        let items = match raw.items {
            None | Some(Value::Null) => None,
            Some(value @ Value::Object(_)) => Some(ArrayItems::Single(Box::new(Self::parse_at(
                &value,
                &format!("{}/items", at),
            )?))),
            Some(Value::Array(entries)) => {
                let mut schemas = Vec::with_capacity(entries.len());
                for (i, entry) in entries.iter().enumerate() {
                    schemas.push(Self::parse_at(entry, &format!("{}/items/{}", at, i))?);
                }
                Some(ArrayItems::Tuple(schemas))
            }
            Some(other) => {
                return Err(SchemaError::InvalidItems {
                    at: at.to_string(),
                    actual: json_kind(&other),
                });
            }
        };

        Ok(Self {
            kind: raw.kind,
            title: raw.title,
            description: raw.description,
            default: raw.default,
            properties,
            items,
            min_items: parse_bound(raw.min_items, at, "minItems")?,
            max_items: parse_bound(raw.max_items, at, "maxItems")?,
            x_component: raw.x_component,
            x_props: raw.x_props.unwrap_or_default(),
            x_item_props: raw.x_item_props.unwrap_or_default(),
            x_component_props: raw.x_component_props.unwrap_or_default(),
        })
    }

    /// Create a schema of the given type.
    pub fn of_type(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// The key used to look this schema up in the field registry.
    pub fn field_type(&self) -> Option<&str> {
        self.x_component.as_deref().or(self.kind.as_deref())
    }

    /// Whether the schema declares object properties.
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Look up a declared property.
    pub fn property(&self, key: &str) -> Option<&Schema> {
        self.properties
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, schema)| schema)
    }

    /// Column-level extension props (`x-props`).
    pub fn extends_props(&self) -> &Map<String, Value> {
        &self.x_props
    }

    /// Item-level extension props (`x-item-props`).
    pub fn extends_item_props(&self) -> &Map<String, Value> {
        &self.x_item_props
    }

    /// Component props: `x-component-props` layered over `x-props`.
    pub fn extends_component_props(&self) -> Map<String, Value> {
        let mut props = self.x_props.clone();
        for (key, value) in &self.x_component_props {
            props.insert(key.clone(), value.clone());
        }
        props
    }

    /// The value a freshly added instance of this schema starts with.
    pub fn empty_value(&self) -> Value {
        if let Some(default) = &self.default {
            return default.clone();
        }
        match self.kind.as_deref() {
            Some("string") => Value::String(String::new()),
            Some("array") => Value::Array(Vec::new()),
            Some("object") => Value::Object(Map::new()),
            _ => Value::Null,
        }
    }
}

impl TryFrom<Value> for Schema {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Schema::from_value(&value)
    }
}

fn parse_bound(
    value: Option<Value>,
    at: &str,
    keyword: &'static str,
) -> Result<Option<usize>, SchemaError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or(SchemaError::InvalidBound {
                at: at.to_string(),
                keyword,
            }),
        Some(_) => Err(SchemaError::InvalidBound {
            at: at.to_string(),
            keyword,
        }),
    }
}

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
