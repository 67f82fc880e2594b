//! Row list wrapper.
//!
//! Owns the bounds-aware gating of row controls (`minItems`/`maxItems`,
//! editable) and the default look of the add/remove/move controls. The table
//! field hands it the value length, the bounds and the render slots; it
//! answers which controls are live and renders them.

use crate::mutators::RowAction;
use crate::node::Node;
use crate::options::{SlotRender, TableOptions};

/// Default control components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayComponents {
    pub addition_icon: &'static str,
    pub remove_icon: &'static str,
    pub move_down_icon: &'static str,
    pub move_up_icon: &'static str,
    /// Button variant used for per-row controls.
    pub row_button: &'static str,
    /// Button variant used for the addition prompt.
    pub addition_button: &'static str,
}

impl Default for ArrayComponents {
    fn default() -> Self {
        Self {
            addition_icon: "plus",
            remove_icon: "delete",
            move_down_icon: "down",
            move_up_icon: "up",
            row_button: "circle",
            addition_button: "text",
        }
    }
}

/// Named render slots, overriding the default control content.
#[derive(Debug, Clone, Default)]
pub struct RenderSlots {
    pub addition: Option<SlotRender>,
    pub remove: Option<SlotRender>,
    pub move_down: Option<SlotRender>,
    pub move_up: Option<SlotRender>,
    pub empty: Option<SlotRender>,
}

impl RenderSlots {
    /// Pull the row-list slots out of the table options.
    pub fn from_options(options: &TableOptions) -> Self {
        Self {
            addition: options.render_addition.clone(),
            remove: options.render_remove.clone(),
            move_down: options.render_move_down.clone(),
            move_up: options.render_move_up.clone(),
            empty: options.render_empty.clone(),
        }
    }
}

/// Configuration surface of the row list.
#[derive(Debug, Clone, Default)]
pub struct RowListProps {
    /// Current number of rows.
    pub len: usize,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub editable: bool,
    pub components: ArrayComponents,
    pub renders: RenderSlots,
}

impl RowListProps {
    /// Whether another row may be added.
    pub fn can_add(&self) -> bool {
        self.editable && self.max_items.is_none_or(|max| self.len < max)
    }

    /// Whether a row may be removed.
    pub fn can_remove(&self) -> bool {
        self.editable && self.min_items.is_none_or(|min| self.len > min)
    }

    /// Whether the row at `index` can move up.
    pub fn can_move_up(&self, index: usize) -> bool {
        self.editable && index > 0 && index < self.len
    }

    /// Whether the row at `index` can move down.
    pub fn can_move_down(&self, index: usize) -> bool {
        self.editable && index + 1 < self.len
    }

    /// Remove control for a row.
    pub fn remove_button(&self, index: usize) -> Node {
        self.row_button(
            &self.renders.remove,
            self.components.remove_icon,
            index,
            RowAction::Remove(index),
            !self.can_remove(),
        )
    }

    /// Move-down control for a row.
    pub fn move_down_button(&self, index: usize) -> Node {
        self.row_button(
            &self.renders.move_down,
            self.components.move_down_icon,
            index,
            RowAction::MoveDown(index),
            !self.can_move_down(index),
        )
    }

    /// Move-up control for a row.
    pub fn move_up_button(&self, index: usize) -> Node {
        self.row_button(
            &self.renders.move_up,
            self.components.move_up_icon,
            index,
            RowAction::MoveUp(index),
            !self.can_move_up(index),
        )
    }

    fn row_button(
        &self,
        slot: &Option<SlotRender>,
        icon: &str,
        index: usize,
        action: RowAction,
        disabled: bool,
    ) -> Node {
        let content = match slot {
            Some(slot) => slot.render(index),
            None => Node::icon(icon),
        };
        Node::Button {
            variant: self.components.row_button.to_string(),
            content: Box::new(content),
            on_click: Some(action),
            disabled,
        }
    }

    /// The "add row" control, placed after the last row.
    ///
    /// Renders nothing when no row may be added.
    pub fn addition(&self) -> Node {
        if !self.can_add() {
            return Node::Empty;
        }
        let content = match &self.renders.addition {
            Some(slot) => slot.render(self.len),
            None => Node::Button {
                variant: self.components.addition_button.to_string(),
                content: Box::new(Node::container(
                    "array-addition-prompt",
                    vec![Node::icon(self.components.addition_icon), Node::text("Add")],
                )),
                on_click: None,
                disabled: false,
            },
        };
        Node::Container {
            class: "array-table-addition".to_string(),
            children: vec![content],
            on_click: Some(RowAction::Add),
        }
    }

    /// Empty-state content, when the list has no rows and a slot is set.
    pub fn empty(&self) -> Option<Node> {
        if self.len > 0 {
            return None;
        }
        self.renders.empty.as_ref().map(|slot| slot.render(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(len: usize) -> RowListProps {
        RowListProps {
            len,
            editable: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_addition_hidden_at_max_items() {
        let mut list = props(2);
        list.max_items = Some(2);
        assert!(!list.can_add());
        assert!(list.addition().is_empty());

        list.len = 1;
        assert!(list.can_add());
        assert_eq!(list.addition().actions(), vec![RowAction::Add]);
    }

    #[test]
    fn test_addition_hidden_when_not_editable() {
        let mut list = props(0);
        list.editable = false;
        assert!(list.addition().is_empty());
    }

    #[test]
    fn test_remove_disabled_at_min_items() {
        let mut list = props(1);
        list.min_items = Some(1);
        assert!(matches!(
            list.remove_button(0),
            Node::Button { disabled: true, .. }
        ));
    }

    #[test]
    fn test_move_controls_disabled_at_edges() {
        let list = props(3);
        assert!(!list.can_move_up(0));
        assert!(list.can_move_up(2));
        assert!(list.can_move_down(0));
        assert!(!list.can_move_down(2));
    }

    #[test]
    fn test_slot_replaces_icon() {
        let mut list = props(2);
        list.renders.remove = Some(SlotRender::per_row(|i| Node::text(format!("drop {}", i))));
        match list.remove_button(1) {
            Node::Button { content, .. } => assert_eq!(*content, Node::text("drop 1")),
            other => panic!("expected a button, got {:?}", other),
        }
    }
}
