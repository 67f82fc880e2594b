//! Table field configuration.
//!
//! Options are read from the schema's component props on every render.
//! Keys the table field recognizes are pulled out; everything else is
//! forwarded to the table node untouched.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::node::Node;
use crate::schema::json_kind;

/// Recognized option keys.
pub const RENDER_ADDITION: &str = "renderAddition";
pub const RENDER_REMOVE: &str = "renderRemove";
pub const RENDER_MOVE_DOWN: &str = "renderMoveDown";
pub const RENDER_MOVE_UP: &str = "renderMoveUp";
pub const RENDER_EMPTY: &str = "renderEmpty";
pub const RENDER_EXTRA_OPERATIONS: &str = "renderExtraOperations";
pub const OPERATIONS_WIDTH: &str = "operationsWidth";
pub const OPERATIONS: &str = "operations";
pub const DRAGABLE: &str = "dragable";

/// Width of the operations column when the schema does not set one.
pub const DEFAULT_OPERATIONS_WIDTH: u16 = 200;

/// Per-row render function.
pub type RowRenderFn = Arc<dyn Fn(usize) -> Node + Send + Sync>;

/// Override for a render slot: a static node or a function of the row index.
#[derive(Clone)]
pub enum SlotRender {
    /// The same node for every row.
    Static(Node),
    /// Built per row.
    PerRow(RowRenderFn),
}

impl SlotRender {
    /// Build a per-row slot from a closure.
    pub fn per_row<F>(f: F) -> Self
    where
        F: Fn(usize) -> Node + Send + Sync + 'static,
    {
        Self::PerRow(Arc::new(f))
    }

    /// Render the slot for a row.
    pub fn render(&self, index: usize) -> Node {
        match self {
            Self::Static(node) => node.clone(),
            Self::PerRow(f) => f(index),
        }
    }

    /// Read a slot from a schema value. Strings become text nodes.
    fn from_value(key: &str, value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(Self::Static(Node::text(text.clone()))),
            other => {
                log::warn!(
                    "ignoring '{}': expected a string, got {}",
                    key,
                    json_kind(other)
                );
                None
            }
        }
    }
}

impl fmt::Debug for SlotRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(node) => f.debug_tuple("Static").field(node).finish(),
            Self::PerRow(_) => f.write_str("PerRow(..)"),
        }
    }
}

/// Options recognized by the table field.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Content of the "add row" control.
    pub render_addition: Option<SlotRender>,
    /// Content of each remove button.
    pub render_remove: Option<SlotRender>,
    /// Content of each move-down button.
    pub render_move_down: Option<SlotRender>,
    /// Content of each move-up button.
    pub render_move_up: Option<SlotRender>,
    /// Shown when there are no rows.
    pub render_empty: Option<SlotRender>,
    /// Extra per-row controls in the operations column.
    pub render_extra_operations: Option<SlotRender>,
    /// Operations column width override.
    pub operations_width: Option<u16>,
    /// Props merged onto the operations column.
    pub operations: Map<String, Value>,
    /// Whether rows can be reordered by dragging.
    pub dragable: bool,
    /// Remaining props, forwarded to the table node.
    pub component_props: Map<String, Value>,
}

impl TableOptions {
    /// Split component props into recognized options and passthrough props.
    pub fn from_props(props: &Map<String, Value>) -> Self {
        let mut options = Self::default();
        for (key, value) in props {
            match key.as_str() {
                RENDER_ADDITION => options.render_addition = SlotRender::from_value(key, value),
                RENDER_REMOVE => options.render_remove = SlotRender::from_value(key, value),
                RENDER_MOVE_DOWN => options.render_move_down = SlotRender::from_value(key, value),
                RENDER_MOVE_UP => options.render_move_up = SlotRender::from_value(key, value),
                RENDER_EMPTY => options.render_empty = SlotRender::from_value(key, value),
                RENDER_EXTRA_OPERATIONS => {
                    options.render_extra_operations = SlotRender::from_value(key, value)
                }
                OPERATIONS_WIDTH => {
                    options.operations_width = value.as_u64().and_then(|w| u16::try_from(w).ok());
                    if options.operations_width.is_none() && !value.is_null() {
                        log::warn!("ignoring '{}': not a valid width: {}", key, value);
                    }
                }
                OPERATIONS => match value {
                    Value::Object(map) => options.operations = map.clone(),
                    Value::Null => {}
                    other => log::warn!(
                        "ignoring '{}': expected an object, got {}",
                        key,
                        json_kind(other)
                    ),
                },
                DRAGABLE => options.dragable = truthy(value),
                _ => {
                    options.component_props.insert(key.clone(), value.clone());
                }
            }
        }
        options
    }

    /// Effective operations column width. Zero counts as unset.
    pub fn operations_width(&self) -> u16 {
        self.operations_width
            .filter(|&width| width > 0)
            .unwrap_or(DEFAULT_OPERATIONS_WIDTH)
    }

    /// Set the addition control content.
    pub fn addition(mut self, slot: SlotRender) -> Self {
        self.render_addition = Some(slot);
        self
    }

    /// Set the extra per-row operations.
    pub fn extra_operations(mut self, slot: SlotRender) -> Self {
        self.render_extra_operations = Some(slot);
        self
    }

    /// Set the empty-state content.
    pub fn empty(mut self, slot: SlotRender) -> Self {
        self.render_empty = Some(slot);
        self
    }

    /// Enable drag reordering.
    pub fn dragable(mut self) -> Self {
        self.dragable = true;
        self
    }

    /// Layer `overrides` on top: every slot it sets replaces ours.
    pub fn with_overrides(mut self, overrides: &TableOptions) -> Self {
        fn pick(ours: &mut Option<SlotRender>, theirs: &Option<SlotRender>) {
            if theirs.is_some() {
                ours.clone_from(theirs);
            }
        }
        pick(&mut self.render_addition, &overrides.render_addition);
        pick(&mut self.render_remove, &overrides.render_remove);
        pick(&mut self.render_move_down, &overrides.render_move_down);
        pick(&mut self.render_move_up, &overrides.render_move_up);
        pick(&mut self.render_empty, &overrides.render_empty);
        pick(
            &mut self.render_extra_operations,
            &overrides.render_extra_operations,
        );
        if overrides.operations_width.is_some() {
            self.operations_width = overrides.operations_width;
        }
        for (key, value) in &overrides.operations {
            self.operations.insert(key.clone(), value.clone());
        }
        self.dragable |= overrides.dragable;
        self
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
