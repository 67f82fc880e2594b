//! Error types

use thiserror::Error;

/// Errors raised while reading a schema node from JSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// The schema value is not a JSON object.
    #[error("schema at '{at}' must be an object, got {actual}")]
    NotAnObject { at: String, actual: &'static str },

    /// `items` is neither a schema object nor an array of schema objects.
    #[error("'items' at '{at}' must be an object or an array, got {actual}")]
    InvalidItems { at: String, actual: &'static str },

    /// A bound (`minItems`/`maxItems`) is not a non-negative integer.
    #[error("'{keyword}' at '{at}' must be a non-negative integer")]
    InvalidBound { at: String, keyword: &'static str },

    /// The raw schema failed to deserialize.
    #[error("schema at '{at}' is malformed: {message}")]
    Malformed { at: String, message: String },
}

/// Errors raised by an array mutator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// An index argument is outside the array.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The value at the bound path exists but is not an array.
    #[error("value at '{path}' is not an array")]
    NotAnArray { path: String },
}

impl MutationError {
    /// Creates a new out-of-bounds error.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

/// Errors raised by the field registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No field is registered under the key.
    #[error("no field registered for type '{0}'")]
    UnknownField(String),

    /// A field is already registered under the key.
    #[error("field type '{0}' is already registered")]
    Duplicate(String),
}

/// Errors raised when completing a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    /// The row count changed between the start and the end of the gesture.
    #[error("drag started with {started} rows but {current} rows are rendered now")]
    Stale { started: usize, current: usize },

    /// The rendered element is not a draggable row.
    #[error("element {0} is not a draggable row")]
    NotARow(usize),

    /// A row index is outside the rendered rows.
    #[error("row index {index} out of bounds for {len} rendered rows")]
    OutOfBounds { index: usize, len: usize },
}
