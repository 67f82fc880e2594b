//! Row rendering.

use serde_json::Value;

use crate::columns::ColumnDescriptor;
use crate::node::TableRowNode;

/// Class of primary row elements.
pub const ROW_CLASS: &str = "table-row";

/// Render every row of `value` against `columns`.
///
/// Non-array values render as zero rows. Rows are positional: each render
/// binds row `i` to index `i` of the current value.
pub fn render_rows(columns: &[ColumnDescriptor<'_>], value: &Value) -> Vec<TableRowNode> {
    let Value::Array(records) = value else {
        return Vec::new();
    };
    records
        .iter()
        .enumerate()
        .map(|(index, record)| TableRowNode {
            index,
            class: ROW_CLASS.to_string(),
            cells: columns
                .iter()
                .map(|column| column.render(&column.cell_value(record), record, index))
                .collect(),
        })
        .collect()
}
