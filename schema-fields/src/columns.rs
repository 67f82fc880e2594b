//! Column derivation.
//!
//! Columns are derived fresh on every render from the array's item
//! schema(s); nothing here outlives a render pass. The editable and
//! dragable flags select a transform pipeline that appends the operations
//! column and prepends the drag handle.

use std::fmt;

use serde_json::{Map, Value};

use crate::fields::FieldDispatch;
use crate::node::{ColumnHeader, Node};
use crate::options::TableOptions;
use crate::path::{FieldPath, resolve_cell_path};
use crate::props::{PropLayers, str_prop, width_prop};
use crate::row_list::RowListProps;
use crate::schema::{ArrayItems, Schema};

/// Key of the operations column.
pub const OPERATIONS_KEY: &str = "operations";
/// Key of the drag-handle column.
pub const DRAG_HANDLE_KEY: &str = "drag-handle";
/// Width of the drag-handle column.
pub const DRAG_HANDLE_WIDTH: u16 = 20;

/// Renders one cell from (cell value, row record, row index).
pub type CellRenderer<'a> = Box<dyn Fn(&Value, &Value, usize) -> Node + 'a>;

/// What a column shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// A property of the item schema at `position`.
    Property { position: usize, key: String },
    /// The whole row value, for scalar item schemas.
    Item { position: usize },
    /// Per-row remove/move controls.
    Operations,
    /// Grab affordance for drag reordering.
    DragHandle,
}

/// A derived column.
pub struct ColumnDescriptor<'a> {
    pub key: String,
    pub title: Option<String>,
    pub width: Option<u16>,
    /// Merged display props.
    pub props: Map<String, Value>,
    pub kind: ColumnKind,
    render: CellRenderer<'a>,
}

impl<'a> ColumnDescriptor<'a> {
    /// Create a column from its parts.
    pub fn new(key: impl Into<String>, kind: ColumnKind, render: CellRenderer<'a>) -> Self {
        Self {
            key: key.into(),
            title: None,
            width: None,
            props: Map::new(),
            kind,
            render,
        }
    }

    /// The part of a row record this column displays.
    pub fn cell_value(&self, record: &Value) -> Value {
        match &self.kind {
            ColumnKind::Property { key, .. } => record.get(key).cloned().unwrap_or(Value::Null),
            ColumnKind::Item { .. } => record.clone(),
            ColumnKind::Operations | ColumnKind::DragHandle => Value::Null,
        }
    }

    /// Render the cell for one row.
    pub fn render(&self, value: &Value, record: &Value, index: usize) -> Node {
        (self.render)(value, record, index)
    }

    /// Whether the column carries schema data.
    pub fn is_data(&self) -> bool {
        matches!(
            self.kind,
            ColumnKind::Property { .. } | ColumnKind::Item { .. }
        )
    }

    /// Header for the table node.
    pub fn header(&self) -> ColumnHeader {
        ColumnHeader {
            key: self.key.clone(),
            title: self.title.clone(),
            width: self.width,
            props: self.props.clone(),
        }
    }
}

impl fmt::Debug for ColumnDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("props", &self.props)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Derive the data columns of an array schema.
///
/// Homogeneous arrays take their columns from the single item schema; tuple
/// arrays concatenate the columns of each position. An item schema with
/// properties yields one column per property, in declaration order; a
/// scalar item schema yields one column keyed by its position.
///
/// Property columns render on every row. Scalar item columns bind to the
/// row value itself, so row `r` only renders in the column of item position
/// `min(r, n - 1)`.
pub fn derive_columns<'a>(
    items: Option<&'a ArrayItems>,
    base: &'a FieldPath,
    dispatch: &'a dyn FieldDispatch,
) -> Vec<ColumnDescriptor<'a>> {
    let Some(items) = items else {
        log::warn!("array at '{}' has no items schema; no data columns", base);
        return Vec::new();
    };

    let mut columns = Vec::new();
    for (position, item) in items.positions().into_iter().enumerate() {
        if item.has_properties() {
            for (key, schema) in &item.properties {
                columns.push(property_column(position, key, schema, base, dispatch));
            }
        } else {
            columns.push(item_column(items, position, item, base, dispatch));
        }
    }
    log::trace!("derived {} data columns for '{}'", columns.len(), base);
    columns
}

fn property_column<'a>(
    position: usize,
    key: &'a str,
    schema: &'a Schema,
    base: &'a FieldPath,
    dispatch: &'a dyn FieldDispatch,
) -> ColumnDescriptor<'a> {
    let render: CellRenderer<'a> = Box::new(move |_value, _record, index| {
        cell(dispatch, schema, resolve_cell_path(base, index, Some(key)))
    });
    with_display_props(
        ColumnDescriptor::new(
            key,
            ColumnKind::Property {
                position,
                key: key.to_string(),
            },
            render,
        ),
        schema,
    )
}

fn item_column<'a>(
    items: &'a ArrayItems,
    position: usize,
    schema: &'a Schema,
    base: &'a FieldPath,
    dispatch: &'a dyn FieldDispatch,
) -> ColumnDescriptor<'a> {
    let render: CellRenderer<'a> = Box::new(move |_value, _record, index| {
        if items.position_for(index) != Some(position) {
            return Node::Empty;
        }
        cell(dispatch, schema, resolve_cell_path(base, index, None))
    });
    with_display_props(
        ColumnDescriptor::new(position.to_string(), ColumnKind::Item { position }, render),
        schema,
    )
}

/// Merge display props: title default < item props < column props.
fn with_display_props<'a>(mut column: ColumnDescriptor<'a>, schema: &Schema) -> ColumnDescriptor<'a> {
    let mut defaults = Map::new();
    if let Some(title) = &schema.title {
        defaults.insert("title".to_string(), Value::String(title.clone()));
    }
    let props = PropLayers::new(&defaults)
        .over(schema.extends_item_props())
        .over(schema.extends_props())
        .merge();
    column.title = str_prop(&props, "title").map(str::to_string);
    column.width = width_prop(&props, "width");
    column.props = props;
    column
}

/// Nested field wrapped in an unlabeled form item keyed by its path.
fn cell(dispatch: &dyn FieldDispatch, schema: &Schema, path: FieldPath) -> Node {
    let child = dispatch.render_field(schema, &path);
    Node::FormItem {
        key: path.to_string(),
        label: None,
        child: Box::new(child),
    }
}

/// Build the trailing operations column.
///
/// `operations` props from the schema are layered under the computed key
/// and width.
pub fn operations_column<'a>(
    options: &'a TableOptions,
    list: &'a RowListProps,
) -> ColumnDescriptor<'a> {
    let mut computed = Map::new();
    computed.insert("key".to_string(), Value::String(OPERATIONS_KEY.to_string()));
    computed.insert("width".to_string(), Value::from(options.operations_width()));
    let props = PropLayers::new(&options.operations).over(&computed).merge();

    let render: CellRenderer<'a> = Box::new(move |_value, _record, index| {
        let mut controls = vec![
            list.remove_button(index),
            list.move_down_button(index),
            list.move_up_button(index),
        ];
        if let Some(extra) = &options.render_extra_operations {
            controls.push(extra.render(index));
        }
        Node::FormItem {
            key: format!("{}.{}", OPERATIONS_KEY, index),
            label: None,
            child: Box::new(Node::container("array-item-operator", controls)),
        }
    });

    let mut column = ColumnDescriptor::new(OPERATIONS_KEY, ColumnKind::Operations, render);
    column.title = str_prop(&props, "title").map(str::to_string);
    column.width = Some(options.operations_width());
    column.props = props;
    column
}

/// Build the leading drag-handle column. It carries no data.
pub fn drag_handle_column<'a>() -> ColumnDescriptor<'a> {
    let render: CellRenderer<'a> =
        Box::new(|_value, _record, _index| Node::container("drag-handler", Vec::new()));
    let mut column = ColumnDescriptor::new(DRAG_HANDLE_KEY, ColumnKind::DragHandle, render);
    column.width = Some(DRAG_HANDLE_WIDTH);
    column
}

// =============================================================================
// Transform pipeline
// =============================================================================

/// One step applied to the derived data columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTransform {
    AppendOperations,
    PrependDragHandle,
}

/// Transforms selected by the field flags, in application order.
pub fn transforms_for(editable: bool, dragable: bool) -> Vec<ColumnTransform> {
    let mut transforms = Vec::new();
    if editable {
        transforms.push(ColumnTransform::AppendOperations);
    }
    if dragable {
        transforms.push(ColumnTransform::PrependDragHandle);
    }
    transforms
}

/// Apply `transforms` to `columns` in order.
pub fn apply_transforms<'a>(
    mut columns: Vec<ColumnDescriptor<'a>>,
    transforms: &[ColumnTransform],
    options: &'a TableOptions,
    list: &'a RowListProps,
) -> Vec<ColumnDescriptor<'a>> {
    for transform in transforms {
        match transform {
            ColumnTransform::AppendOperations => columns.push(operations_column(options, list)),
            ColumnTransform::PrependDragHandle => columns.insert(0, drag_handle_column()),
        }
    }
    columns
}
