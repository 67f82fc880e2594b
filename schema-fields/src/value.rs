//! Form value container.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};

use crate::error::MutationError;
use crate::mutators::{ArrayMutators, move_in_place, remove_at};
use crate::path::{FieldPath, Segment};

/// Shared form value with interior mutability.
///
/// `FormState` holds the whole form's JSON value. It is cheap to clone;
/// clones share the same value. Every write sets the dirty flag and bumps
/// the revision, which the owner uses to decide when to re-render.
///
/// # Example
///
/// ```ignore
/// let form = FormState::new(json!({ "users": [] }));
/// form.array("users").push(json!({ "name": "" }))?;
/// assert!(form.is_dirty());
/// ```
#[derive(Debug)]
pub struct FormState {
    inner: Arc<RwLock<Value>>,
    dirty: Arc<AtomicBool>,
    revision: Arc<AtomicU64>,
}

impl FormState {
    /// Create a new form state with the given value
    pub fn new(value: Value) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            revision: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the whole value
    pub fn get(&self) -> Value {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Get a clone of the value at `path` (`Null` when absent)
    pub fn get_in(&self, path: &FieldPath) -> Value {
        let read = |root: &Value| lookup(root, path).cloned().unwrap_or(Value::Null);
        match self.inner.read() {
            Ok(guard) => read(&*guard),
            Err(poisoned) => read(&*poisoned.into_inner()),
        }
    }

    /// Replace the whole value
    pub fn set(&self, value: Value) {
        self.update(|root| *root = value);
    }

    /// Write `value` at `path`, creating intermediate containers.
    ///
    /// An index may address an existing element or append one past the
    /// end; anything further out is rejected without touching the value.
    pub fn set_in(&self, path: &FieldPath, value: Value) -> Result<(), MutationError> {
        self.try_update(|root| {
            *lookup_or_insert(root, path)? = value;
            Ok(())
        })
    }

    /// Update the value using a closure
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Value) -> R,
    {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let result = f(&mut guard);
        self.dirty.store(true, Ordering::SeqCst);
        self.revision.fetch_add(1, Ordering::SeqCst);
        result
    }

    /// Update the value with a fallible closure.
    ///
    /// The dirty flag and revision only change when the closure succeeds.
    pub fn try_update<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Value) -> Result<R, E>,
    {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let result = f(&mut guard)?;
        self.dirty.store(true, Ordering::SeqCst);
        self.revision.fetch_add(1, Ordering::SeqCst);
        Ok(result)
    }

    /// Number of writes since creation
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Check if the value has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Mutators for the array at `path`.
    pub fn array(&self, path: impl Into<FieldPath>) -> ArrayHandle {
        ArrayHandle {
            state: self.clone(),
            path: path.into(),
        }
    }
}

impl Clone for FormState {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            revision: Arc::clone(&self.revision),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()))
    }
}

/// [`ArrayMutators`] bound to one array inside a [`FormState`].
///
/// A missing (`null`) value at the path counts as an empty array and is
/// created on the first `push`.
#[derive(Debug, Clone)]
pub struct ArrayHandle {
    state: FormState,
    path: FieldPath,
}

impl ArrayHandle {
    /// The path of the bound array.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    fn with_array<R>(
        &self,
        f: impl FnOnce(&mut Vec<Value>) -> Result<R, MutationError>,
    ) -> Result<R, MutationError> {
        let path = &self.path;
        self.state.try_update(|root| {
            if !matches!(lookup(root, path), None | Some(Value::Null | Value::Array(_))) {
                return Err(MutationError::NotAnArray {
                    path: path.to_string(),
                });
            }
            let slot = lookup_or_insert(root, path)?;
            if slot.is_null() {
                *slot = Value::Array(Vec::new());
            }
            match slot {
                Value::Array(items) => f(items),
                _ => Err(MutationError::NotAnArray {
                    path: path.to_string(),
                }),
            }
        })
    }
}

impl ArrayMutators for ArrayHandle {
    fn len(&self) -> usize {
        match self.state.get_in(&self.path) {
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    fn push(&self, value: Value) -> Result<(), MutationError> {
        self.with_array(|items| {
            items.push(value);
            log::debug!("push at '{}' (len {})", self.path, items.len());
            Ok(())
        })
    }

    fn remove(&self, index: usize) -> Result<(), MutationError> {
        self.with_array(|items| {
            remove_at(items, index)?;
            log::debug!("remove {} at '{}'", index, self.path);
            Ok(())
        })
    }

    fn move_item(&self, from: usize, to: usize) -> Result<(), MutationError> {
        self.with_array(|items| {
            move_in_place(items, from, to)?;
            log::debug!("move {} -> {} at '{}'", from, to, self.path);
            Ok(())
        })
    }
}

fn lookup<'v>(root: &'v Value, path: &FieldPath) -> Option<&'v Value> {
    path.segments()
        .iter()
        .try_fold(root, |value, segment| match (segment, value) {
            (Segment::Key(key), Value::Object(map)) => map.get(key),
            (Segment::Index(index), Value::Array(items)) => items.get(*index),
            (Segment::Index(index), Value::Object(map)) => map.get(&index.to_string()),
            _ => None,
        })
}

/// Check that every index along `path` is at most one past the end of the
/// array it lands in, counting containers `lookup_or_insert` would create.
fn check_insertable(root: &Value, path: &FieldPath) -> Result<(), MutationError> {
    let mut current = Some(root);
    for segment in path.segments() {
        current = match segment {
            Segment::Index(index) => {
                let items: &[Value] = match current {
                    Some(Value::Array(items)) => items.as_slice(),
                    _ => &[],
                };
                if *index > items.len() {
                    return Err(MutationError::out_of_bounds(*index, items.len()));
                }
                items.get(*index)
            }
            Segment::Key(key) => match current {
                Some(Value::Object(map)) => map.get(key),
                _ => None,
            },
        };
    }
    Ok(())
}

fn lookup_or_insert<'v>(
    root: &'v mut Value,
    path: &FieldPath,
) -> Result<&'v mut Value, MutationError> {
    check_insertable(root, path)?;
    let mut current = root;
    for segment in path.segments() {
        current = match segment {
            Segment::Index(index) => {
                if !current.is_array() {
                    *current = Value::Array(Vec::new());
                }
                let Value::Array(items) = current else {
                    unreachable!("value was just replaced with an array")
                };
                if items.len() == *index {
                    items.push(Value::Null);
                }
                &mut items[*index]
            }
            Segment::Key(key) => {
                if !current.is_object() {
                    *current = Value::Object(Map::new());
                }
                let Value::Object(map) = current else {
                    unreachable!("value was just replaced with an object")
                };
                map.entry(key.clone()).or_insert(Value::Null)
            }
        };
    }
    Ok(current)
}
