//! Render tree produced by fields.
//!
//! Fields do not draw anything themselves. They return a [`Node`] tree that
//! a toolkit adapter turns into real widgets. Interactive nodes carry the
//! [`RowAction`] they trigger instead of a callback.

use serde_json::{Map, Value};

use crate::mutators::RowAction;
use crate::path::FieldPath;

/// Table header for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHeader {
    /// Column key.
    pub key: String,
    /// Header title.
    pub title: Option<String>,
    /// Fixed width, if any.
    pub width: Option<u16>,
    /// Merged display props.
    pub props: Map<String, Value>,
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowNode {
    /// Row index in the backing array.
    pub index: usize,
    /// Row element class, matched by the drag adapter's selectors.
    pub class: String,
    /// One cell per column.
    pub cells: Vec<Node>,
}

/// A node in the render tree
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String },

    /// Named icon
    Icon { name: String },

    /// Container element
    Container {
        class: String,
        children: Vec<Node>,
        on_click: Option<RowAction>,
    },

    /// Clickable button
    Button {
        /// Button style (`circle` or `text`)
        variant: String,
        /// Button content
        content: Box<Node>,
        /// Action triggered on click
        on_click: Option<RowAction>,
        /// Whether the button is disabled
        disabled: bool,
    },

    /// Form item wrapper around a nested field
    FormItem {
        key: String,
        label: Option<String>,
        child: Box<Node>,
    },

    /// Leaf input bound to a path, for schemas with no registered field
    Input {
        field_type: Option<String>,
        path: FieldPath,
        value: Value,
        disabled: bool,
    },

    /// Rating input
    Rating {
        path: FieldPath,
        value: f64,
        count: u32,
        allow_half: bool,
        disabled: bool,
        props: Map<String, Value>,
    },

    /// Table
    Table {
        columns: Vec<ColumnHeader>,
        rows: Vec<TableRowNode>,
        /// Shown instead of rows when there are none
        empty: Option<Box<Node>>,
        pagination: bool,
        props: Map<String, Value>,
    },

    /// Drag-and-drop wrapper around a list of row elements
    DragList {
        node_selector: String,
        ignore_selector: String,
        child: Box<Node>,
    },
}

impl Node {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Create an icon node
    pub fn icon(name: impl Into<String>) -> Self {
        Self::Icon { name: name.into() }
    }

    /// Create a container node
    pub fn container(class: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Container {
            class: class.into(),
            children,
            on_click: None,
        }
    }

    /// Check if node is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Child nodes, in order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Container { children, .. } => children.iter().collect(),
            Self::Button { content, .. } => vec![content.as_ref()],
            Self::FormItem { child, .. } | Self::DragList { child, .. } => vec![child.as_ref()],
            Self::Table { rows, empty, .. } => rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .chain(empty.as_deref())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Depth-first search for the first node matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if pred(self) {
            return Some(self);
        }
        self.children().into_iter().find_map(|child| child.find(pred))
    }

    /// Every action reachable from this node, depth first.
    pub fn actions(&self) -> Vec<RowAction> {
        let mut actions = Vec::new();
        self.collect_actions(&mut actions);
        actions
    }

    fn collect_actions(&self, out: &mut Vec<RowAction>) {
        match self {
            Self::Container {
                on_click: Some(action),
                ..
            }
            | Self::Button {
                on_click: Some(action),
                disabled: false,
                ..
            } => out.push(*action),
            _ => {}
        }
        for child in self.children() {
            child.collect_actions(out);
        }
    }
}
