//! Drag-and-drop row reordering.
//!
//! The toolkit reports drags in terms of rendered row elements. Only
//! elements matching the row selector take part; expanded detail rows are
//! skipped, so element positions and row indices can differ. A
//! [`DragSession`] maps a completed gesture back to row indices and refuses
//! it if the row count changed while the drag was in flight.

use crate::error::DragError;
use crate::mutators::RowAction;
use crate::node::Node;

/// Selector for primary row elements.
pub const ROW_SELECTOR: &str = "tr.table-row";
/// Selector for expanded detail rows.
pub const EXPANDED_ROW_SELECTOR: &str = "tr.table-expanded-row";

/// A rendered element as seen by the drag adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    /// Tag name (`tr`).
    pub tag: String,
    /// Class list.
    pub classes: Vec<String>,
}

impl RenderedElement {
    pub fn new(tag: impl Into<String>, classes: &[&str]) -> Self {
        Self {
            tag: tag.into(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Match a `tag.class` selector (either part optional).
    pub fn matches(&self, selector: &str) -> bool {
        let (tag, class) = match selector.split_once('.') {
            Some((tag, class)) => (tag, Some(class)),
            None => (selector, None),
        };
        (tag.is_empty() || tag == self.tag)
            && class.is_none_or(|class| self.classes.iter().any(|c| c == class))
    }
}

/// A completed drag, in row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub source: usize,
    pub target: usize,
}

impl DragGesture {
    /// The move this gesture requests.
    pub fn action(&self) -> RowAction {
        RowAction::Move {
            from: self.source,
            to: self.target,
        }
    }
}

/// Drag wrapper configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragListView {
    pub node_selector: String,
    pub ignore_selector: String,
}

impl Default for DragListView {
    fn default() -> Self {
        Self {
            node_selector: ROW_SELECTOR.to_string(),
            ignore_selector: EXPANDED_ROW_SELECTOR.to_string(),
        }
    }
}

impl DragListView {
    /// Wrap a rendered table so its rows can be dragged.
    pub fn wrap(&self, child: Node) -> Node {
        Node::DragList {
            node_selector: self.node_selector.clone(),
            ignore_selector: self.ignore_selector.clone(),
            child: Box::new(child),
        }
    }

    fn participates(&self, element: &RenderedElement) -> bool {
        element.matches(&self.node_selector) && !element.matches(&self.ignore_selector)
    }

    /// Row index of the element at `position`, or `None` if it does not
    /// take part in dragging.
    pub fn row_index(&self, elements: &[RenderedElement], position: usize) -> Option<usize> {
        let element = elements.get(position)?;
        if !self.participates(element) {
            return None;
        }
        Some(
            elements[..position]
                .iter()
                .filter(|e| self.participates(e))
                .count(),
        )
    }

    /// Number of draggable rows among `elements`.
    pub fn row_count(&self, elements: &[RenderedElement]) -> usize {
        elements.iter().filter(|e| self.participates(e)).count()
    }

    /// Start a drag on the element at `position`.
    pub fn begin(
        &self,
        elements: &[RenderedElement],
        position: usize,
    ) -> Result<DragSession, DragError> {
        let source = self
            .row_index(elements, position)
            .ok_or(DragError::NotARow(position))?;
        Ok(DragSession {
            source,
            started_rows: self.row_count(elements),
        })
    }
}

/// An in-flight drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    source: usize,
    started_rows: usize,
}

impl DragSession {
    /// Start a drag directly from a row index.
    pub fn from_row(source: usize, rows: usize) -> Result<Self, DragError> {
        if source >= rows {
            return Err(DragError::OutOfBounds {
                index: source,
                len: rows,
            });
        }
        Ok(Self {
            source,
            started_rows: rows,
        })
    }

    /// Source row index.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Complete the drag on row `target`, given the current row count.
    pub fn finish(self, target: usize, current_rows: usize) -> Result<DragGesture, DragError> {
        if current_rows != self.started_rows {
            return Err(DragError::Stale {
                started: self.started_rows,
                current: current_rows,
            });
        }
        if target >= current_rows {
            return Err(DragError::OutOfBounds {
                index: target,
                len: current_rows,
            });
        }
        Ok(DragGesture {
            source: self.source,
            target,
        })
    }

    /// Complete the drag on the rendered element at `position`.
    pub fn finish_on(
        self,
        view: &DragListView,
        elements: &[RenderedElement],
        position: usize,
    ) -> Result<DragGesture, DragError> {
        let target = view
            .row_index(elements, position)
            .ok_or(DragError::NotARow(position))?;
        self.finish(target, view.row_count(elements))
    }
}
