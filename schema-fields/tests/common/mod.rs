//! Shared test doubles.

#![allow(dead_code)]

use std::cell::RefCell;

use schema_fields::error::MutationError;
use schema_fields::fields::{FieldContext, FieldDispatch};
use schema_fields::mutators::{ArrayMutators, move_in_place, remove_at};
use schema_fields::node::Node;
use schema_fields::path::FieldPath;
use schema_fields::schema::Schema;
use serde_json::Value;

/// In-memory mutators that log every call.
#[derive(Default)]
pub struct RecordingMutators {
    pub items: RefCell<Vec<Value>>,
    pub calls: RefCell<Vec<String>>,
}

impl RecordingMutators {
    pub fn with(items: Vec<Value>) -> Self {
        Self {
            items: RefCell::new(items),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn value(&self) -> Value {
        Value::Array(self.items.borrow().clone())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ArrayMutators for RecordingMutators {
    fn len(&self) -> usize {
        self.items.borrow().len()
    }

    fn push(&self, value: Value) -> Result<(), MutationError> {
        self.calls.borrow_mut().push(format!("push({})", value));
        self.items.borrow_mut().push(value);
        Ok(())
    }

    fn remove(&self, index: usize) -> Result<(), MutationError> {
        self.calls.borrow_mut().push(format!("remove({})", index));
        remove_at(&mut *self.items.borrow_mut(), index).map(|_| ())
    }

    fn move_item(&self, from: usize, to: usize) -> Result<(), MutationError> {
        self.calls.borrow_mut().push(format!("move({}, {})", from, to));
        move_in_place(&mut *self.items.borrow_mut(), from, to)
    }
}

/// Dispatcher that renders a leaf input per call and records what it saw.
#[derive(Default)]
pub struct RecordingDispatch {
    pub seen: RefCell<Vec<(Option<String>, String)>>,
}

impl RecordingDispatch {
    pub fn seen(&self) -> Vec<(Option<String>, String)> {
        self.seen.borrow().clone()
    }
}

impl FieldDispatch for RecordingDispatch {
    fn render_field(&self, schema: &Schema, path: &FieldPath) -> Node {
        self.seen
            .borrow_mut()
            .push((schema.kind.clone(), path.to_string()));
        Node::Input {
            field_type: schema.kind.clone(),
            path: path.clone(),
            value: Value::Null,
            disabled: false,
        }
    }
}

pub fn schema(value: Value) -> Schema {
    Schema::from_value(&value).unwrap()
}

pub fn context<'a>(
    schema: &'a Schema,
    path: &'a FieldPath,
    value: &'a Value,
    editable: bool,
    mutators: &'a dyn ArrayMutators,
    dispatch: &'a dyn FieldDispatch,
) -> FieldContext<'a> {
    FieldContext {
        schema,
        path,
        value,
        editable,
        mutators,
        dispatch,
    }
}

/// Column keys of the first table node under `node`.
pub fn column_keys(node: &Node) -> Vec<String> {
    match node.find(&|n| matches!(n, Node::Table { .. })) {
        Some(Node::Table { columns, .. }) => columns.iter().map(|c| c.key.clone()).collect(),
        _ => Vec::new(),
    }
}

/// Rows of the first table node under `node`.
pub fn table_rows(node: &Node) -> Vec<schema_fields::node::TableRowNode> {
    match node.find(&|n| matches!(n, Node::Table { .. })) {
        Some(Node::Table { rows, .. }) => rows.clone(),
        _ => Vec::new(),
    }
}
