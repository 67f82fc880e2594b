//! Field registry and dispatch.
//!
//! A field is a renderer for one schema node bound to one path. Fields are
//! registered under a string key (`"table"`, `"rating"`, ...). The key of a
//! schema is its `x-component`, falling back to its `type`.
//!
//! Built-in fields are submitted to `inventory` from their own modules and
//! are also available through [`FieldRegistry::builtin`].

pub mod rating;
pub mod table;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::RegistryError;
use crate::mutators::{ArrayMutators, RowAction};
use crate::node::Node;
use crate::path::FieldPath;
use crate::schema::Schema;
use crate::value::FormState;

/// Everything a field needs to render one instance.
pub struct FieldContext<'a> {
    /// Schema node of this instance.
    pub schema: &'a Schema,
    /// Location of this instance in the form value.
    pub path: &'a FieldPath,
    /// Current value at `path`.
    pub value: &'a Value,
    /// Whether the instance accepts edits.
    pub editable: bool,
    /// Structural edits on the value (meaningful for array fields).
    pub mutators: &'a dyn ArrayMutators,
    /// Renders nested fields.
    pub dispatch: &'a dyn FieldDispatch,
}

/// A registered field renderer.
pub trait FormField: Send + Sync {
    /// Registry key.
    fn name(&self) -> &'static str;

    /// Render one instance.
    fn render(&self, cx: &FieldContext<'_>) -> Node;

    /// Apply a gesture produced by a previous render.
    ///
    /// Returns whether a mutation was issued. Fields without gestures
    /// ignore every action.
    fn handle_action(&self, cx: &FieldContext<'_>, action: RowAction) -> bool {
        let _ = (cx, action);
        false
    }
}

/// Renders the field appropriate for a schema node at a path.
pub trait FieldDispatch {
    fn render_field(&self, schema: &Schema, path: &FieldPath) -> Node;
}

/// Factory for a registered field.
pub type FieldFactory = fn() -> Box<dyn FormField>;

/// Field registration entry for inventory.
pub struct FieldRegistration {
    /// Registry key.
    pub name: &'static str,
    /// Factory function to create the field.
    pub factory: FieldFactory,
}

impl FieldRegistration {
    /// Create a new field registration.
    pub const fn new(name: &'static str, factory: FieldFactory) -> Self {
        Self { name, factory }
    }
}

inventory::collect!(FieldRegistration);

/// Get all registered fields.
pub fn registered_fields() -> impl Iterator<Item = &'static FieldRegistration> {
    inventory::iter::<FieldRegistration>()
}

/// Key → field lookup table.
///
/// Each key is resolved to a field instance once, when it is registered.
#[derive(Default, Clone)]
pub struct FieldRegistry {
    fields: HashMap<String, Arc<dyn FormField>>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory-submitted fields plus the built-in `table` and `rating`.
    ///
    /// The built-ins are inserted explicitly so they are present even when
    /// the linker drops their inventory submissions.
    pub fn builtin() -> Self {
        let mut registry = Self::from_inventory();
        registry.insert("table", Arc::new(table::TableField::new()));
        registry.insert("rating", Arc::new(rating::RatingField));
        registry
    }

    /// Registry with every inventory-submitted field.
    ///
    /// When two submissions share a key the first one seen wins.
    pub fn from_inventory() -> Self {
        let mut registry = Self::new();
        for registration in registered_fields() {
            if let Err(e) = registry.register(registration.name, (registration.factory)()) {
                log::warn!("{}", e);
            }
        }
        registry
    }

    /// Register a field under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        field: Box<dyn FormField>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.fields.insert(name, Arc::from(field));
        Ok(())
    }

    /// Register or replace a field under `name`.
    pub fn insert(&mut self, name: impl Into<String>, field: Arc<dyn FormField>) {
        self.fields.insert(name.into(), field);
    }

    /// Look up a field by key.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn FormField>, RegistryError> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownField(name.to_string()))
    }

    /// Look up the field for a schema node.
    pub fn resolve_schema(&self, schema: &Schema) -> Option<Arc<dyn FormField>> {
        let key = schema.field_type()?;
        self.fields.get(key).cloned()
    }

    /// Whether a key is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Registered keys, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort();
        names
    }
}

/// Default [`FieldDispatch`]: renders registered fields against a form state.
///
/// Schemas whose key is not registered render as a leaf [`Node::Input`].
pub struct SchemaField<'a> {
    registry: &'a FieldRegistry,
    state: &'a FormState,
    editable: bool,
}

impl<'a> SchemaField<'a> {
    pub fn new(registry: &'a FieldRegistry, state: &'a FormState, editable: bool) -> Self {
        Self {
            registry,
            state,
            editable,
        }
    }

    /// Render the root field of a form.
    pub fn render_root(&self, schema: &Schema) -> Node {
        self.render_field(schema, &FieldPath::root())
    }

    /// Route a gesture to the field at `path`.
    pub fn handle_action(&self, schema: &Schema, path: &FieldPath, action: RowAction) -> bool {
        let Some(field) = self.registry.resolve_schema(schema) else {
            log::warn!("no field for '{}'; dropping {:?}", path, action);
            return false;
        };
        let value = self.state.get_in(path);
        let mutators = self.state.array(path.clone());
        let cx = FieldContext {
            schema,
            path,
            value: &value,
            editable: self.editable,
            mutators: &mutators,
            dispatch: self,
        };
        field.handle_action(&cx, action)
    }
}

impl FieldDispatch for SchemaField<'_> {
    fn render_field(&self, schema: &Schema, path: &FieldPath) -> Node {
        let value = self.state.get_in(path);
        match self.registry.resolve_schema(schema) {
            Some(field) => {
                let mutators = self.state.array(path.clone());
                let cx = FieldContext {
                    schema,
                    path,
                    value: &value,
                    editable: self.editable,
                    mutators: &mutators,
                    dispatch: self,
                };
                field.render(&cx)
            }
            None => Node::Input {
                field_type: schema.field_type().map(str::to_string),
                path: path.clone(),
                value,
                disabled: !self.editable,
            },
        }
    }
}
