//! Table field - edits an array value as a table.
//!
//! Each row of the array is one table row. Columns come from the item
//! schema(s) (see [`derive_columns`]); each cell renders the nested field
//! for `path.<row>.<key>` through the field dispatcher. When editable, a
//! trailing operations column offers remove/move controls and an addition
//! control follows the table. When the schema sets `dragable`, rows can
//! also be reordered by dragging.
//!
//! All structural edits go through [`RowMutations`], which delegates to the
//! form's [`ArrayMutators`]. The field keeps no per-row state between
//! renders.
//!
//! # Example
//!
//! ```ignore
//! let schema = Schema::from_value(&json!({
//!     "type": "array",
//!     "x-component": "table",
//!     "items": {
//!         "type": "object",
//!         "properties": {
//!             "name": { "type": "string", "title": "Name" },
//!             "age": { "type": "number", "title": "Age" }
//!         }
//!     }
//! }))?;
//! let form = FormState::new(json!([{ "name": "Ada", "age": 36 }]));
//! let registry = FieldRegistry::builtin();
//! let root = SchemaField::new(&registry, &form, true).render_root(&schema);
//! ```

use crate::columns::{apply_transforms, derive_columns, transforms_for};
use crate::drag::{DragListView, DragSession};
use crate::error::MutationError;
use crate::mutators::{ArrayMutators, RowAction};
use crate::node::Node;
use crate::options::TableOptions;
use crate::row_list::{ArrayComponents, RenderSlots, RowListProps};
use crate::rows::render_rows;
use crate::schema::{ArrayItems, Schema};

use super::{FieldContext, FieldRegistration, FormField};

/// Registry key.
pub const TABLE: &str = "table";

fn create() -> Box<dyn FormField> {
    Box::new(TableField::new())
}

inventory::submit! {
    FieldRegistration::new(TABLE, create)
}

/// Translates row gestures into mutator calls.
///
/// Never touches the value directly.
pub struct RowMutations<'a> {
    items: Option<&'a ArrayItems>,
    mutators: &'a dyn ArrayMutators,
}

impl<'a> RowMutations<'a> {
    pub fn new(schema: &'a Schema, mutators: &'a dyn ArrayMutators) -> Self {
        Self {
            items: schema.items.as_ref(),
            mutators,
        }
    }

    /// Append a new row holding the template schema's empty value.
    ///
    /// Returns `Ok(false)` without mutating when there is no items schema.
    pub fn on_add(&self) -> Result<bool, MutationError> {
        let Some(template) = self.items.and_then(ArrayItems::template) else {
            log::warn!("no items schema; nothing to add");
            return Ok(false);
        };
        self.mutators.push(template.empty_value())?;
        Ok(true)
    }

    pub fn on_remove(&self, index: usize) -> Result<bool, MutationError> {
        self.mutators.remove(index)?;
        Ok(true)
    }

    pub fn on_move_up(&self, index: usize) -> Result<bool, MutationError> {
        self.mutators.move_up(index)?;
        Ok(true)
    }

    pub fn on_move_down(&self, index: usize) -> Result<bool, MutationError> {
        self.mutators.move_down(index)?;
        Ok(true)
    }

    pub fn on_move(&self, from: usize, to: usize) -> Result<bool, MutationError> {
        self.mutators.move_item(from, to)?;
        Ok(true)
    }

    /// Dispatch an action.
    pub fn apply(&self, action: RowAction) -> Result<bool, MutationError> {
        match action {
            RowAction::Add => self.on_add(),
            RowAction::Remove(index) => self.on_remove(index),
            RowAction::MoveUp(index) => self.on_move_up(index),
            RowAction::MoveDown(index) => self.on_move_down(index),
            RowAction::Move { from, to } => self.on_move(from, to),
        }
    }
}

/// The `table` field.
#[derive(Debug, Clone, Default)]
pub struct TableField {
    overrides: TableOptions,
    components: ArrayComponents,
}

impl TableField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that take precedence over the schema's, for slots that
    /// cannot be expressed in JSON (per-row render functions).
    pub fn with_overrides(mut self, overrides: TableOptions) -> Self {
        self.overrides = overrides;
        self
    }

    /// Replace the default control components.
    pub fn with_components(mut self, components: ArrayComponents) -> Self {
        self.components = components;
        self
    }

    /// Effective options for a schema node.
    pub fn options(&self, schema: &Schema) -> TableOptions {
        TableOptions::from_props(&schema.extends_component_props()).with_overrides(&self.overrides)
    }

    fn row_list(&self, cx: &FieldContext<'_>, options: &TableOptions) -> RowListProps {
        RowListProps {
            len: cx.value.as_array().map_or(0, Vec::len),
            min_items: cx.schema.min_items,
            max_items: cx.schema.max_items,
            editable: cx.editable,
            components: self.components.clone(),
            renders: RenderSlots::from_options(options),
        }
    }

    /// Complete a drag gesture started with `session` on row `target`.
    ///
    /// Dragable tables reorder whether or not they are editable. Stale
    /// gestures (the row count changed since the drag began) are dropped.
    pub fn handle_drag(&self, cx: &FieldContext<'_>, session: DragSession, target: usize) -> bool {
        if !self.options(cx.schema).dragable {
            log::warn!("drag on non-dragable table '{}'", cx.path);
            return false;
        }
        let gesture = match session.finish(target, cx.mutators.len()) {
            Ok(gesture) => gesture,
            Err(e) => {
                log::warn!("dropping drag on '{}': {}", cx.path, e);
                return false;
            }
        };
        match RowMutations::new(cx.schema, cx.mutators).on_move(gesture.source, gesture.target) {
            Ok(applied) => applied,
            Err(e) => {
                log::warn!("{:?} on '{}' failed: {}", gesture.action(), cx.path, e);
                false
            }
        }
    }
}

impl FormField for TableField {
    fn name(&self) -> &'static str {
        TABLE
    }

    fn render(&self, cx: &FieldContext<'_>) -> Node {
        let options = self.options(cx.schema);
        let list = self.row_list(cx, &options);

        let columns = apply_transforms(
            derive_columns(cx.schema.items.as_ref(), cx.path, cx.dispatch),
            &transforms_for(cx.editable, options.dragable),
            &options,
            &list,
        );
        let rows = render_rows(&columns, cx.value);

        let table = Node::Table {
            columns: columns.iter().map(|c| c.header()).collect(),
            rows,
            empty: list.empty().map(Box::new),
            pagination: false,
            props: options.component_props.clone(),
        };
        let body = if options.dragable {
            DragListView::default().wrap(table)
        } else {
            table
        };

        Node::container("array-table", vec![body, list.addition()])
    }

    fn handle_action(&self, cx: &FieldContext<'_>, action: RowAction) -> bool {
        if !cx.editable {
            log::warn!("ignoring {:?} on read-only table '{}'", action, cx.path);
            return false;
        }
        let list = self.row_list(cx, &self.options(cx.schema));
        let allowed = match action {
            RowAction::Add => list.can_add(),
            RowAction::Remove(_) => list.can_remove(),
            _ => true,
        };
        if !allowed {
            log::warn!("{:?} on '{}' exceeds the item bounds", action, cx.path);
            return false;
        }
        match RowMutations::new(cx.schema, cx.mutators).apply(action) {
            Ok(applied) => applied,
            Err(e) => {
                log::warn!("{:?} on '{}' failed: {}", action, cx.path, e);
                false
            }
        }
    }
}

