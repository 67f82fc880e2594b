pub mod columns;
pub mod drag;
pub mod error;
pub mod fields;
pub mod mutators;
pub mod node;
pub mod options;
pub mod path;
pub mod props;
pub mod row_list;
pub mod rows;
pub mod schema;
pub mod value;

pub mod prelude {
    pub use crate::columns::{ColumnDescriptor, ColumnKind, ColumnTransform, derive_columns};
    pub use crate::drag::{DragGesture, DragListView, DragSession, RenderedElement};
    pub use crate::error::{DragError, MutationError, RegistryError, SchemaError};
    pub use crate::fields::rating::RatingField;
    pub use crate::fields::table::{RowMutations, TableField};
    pub use crate::fields::{
        FieldContext, FieldDispatch, FieldRegistration, FieldRegistry, FormField, SchemaField,
    };
    pub use crate::mutators::{ArrayMutators, RowAction};
    pub use crate::node::{ColumnHeader, Node, TableRowNode};
    pub use crate::options::{SlotRender, TableOptions};
    pub use crate::path::{FieldPath, Segment};
    pub use crate::row_list::{ArrayComponents, RenderSlots, RowListProps};
    pub use crate::schema::{ArrayItems, Schema};
    pub use crate::value::{ArrayHandle, FormState};
}
