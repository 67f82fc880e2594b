//! Array mutation capability.
//!
//! Fields never edit an array value directly. Every structural change goes
//! through an [`ArrayMutators`] implementation, which owns the index
//! bookkeeping and notifies the owning form state.

use serde_json::Value;

use crate::error::MutationError;

/// Structural edit operations on one array value.
///
/// Methods take `&self`; implementations use interior mutability the same
/// way [`FormState`](crate::value::FormState) does.
pub trait ArrayMutators {
    /// Current number of elements.
    fn len(&self) -> usize;

    /// Whether the array has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `value` at the end.
    fn push(&self, value: Value) -> Result<(), MutationError>;

    /// Remove the element at `index`.
    fn remove(&self, index: usize) -> Result<(), MutationError>;

    /// Relocate the element at `from` to position `to`.
    fn move_item(&self, from: usize, to: usize) -> Result<(), MutationError>;

    /// Swap the element at `index` with its predecessor. No-op at index 0.
    fn move_up(&self, index: usize) -> Result<(), MutationError> {
        let len = self.len();
        if index >= len {
            return Err(MutationError::out_of_bounds(index, len));
        }
        if index == 0 {
            return Ok(());
        }
        self.move_item(index, index - 1)
    }

    /// Swap the element at `index` with its successor. No-op at the last index.
    fn move_down(&self, index: usize) -> Result<(), MutationError> {
        let len = self.len();
        if index >= len {
            return Err(MutationError::out_of_bounds(index, len));
        }
        if index + 1 == len {
            return Ok(());
        }
        self.move_item(index, index + 1)
    }
}

/// A user gesture on a table field, expressed as data.
///
/// Rendered controls carry the action they trigger; the owning field turns
/// it into mutator calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Append a new row.
    Add,
    /// Remove the row at the index.
    Remove(usize),
    /// Move the row at the index one position up.
    MoveUp(usize),
    /// Move the row at the index one position down.
    MoveDown(usize),
    /// Relocate a row (completed drag gesture).
    Move { from: usize, to: usize },
}

/// Remove the element at `index`, shifting later elements down.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Result<T, MutationError> {
    if index >= items.len() {
        return Err(MutationError::out_of_bounds(index, items.len()));
    }
    Ok(items.remove(index))
}

/// Relocate the element at `from` to `to`, shifting the elements between.
pub fn move_in_place<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), MutationError> {
    let len = items.len();
    if from >= len {
        return Err(MutationError::out_of_bounds(from, len));
    }
    if to >= len {
        return Err(MutationError::out_of_bounds(to, len));
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward_shifts_between() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_in_place(&mut items, 0, 2).unwrap();
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_move_backward_shifts_between() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_in_place(&mut items, 3, 1).unwrap();
        assert_eq!(items, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_move_same_index_is_noop() {
        let mut items = vec![1, 2, 3];
        move_in_place(&mut items, 1, 1).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_move_out_of_bounds() {
        let mut items = vec![1, 2];
        assert_eq!(
            move_in_place(&mut items, 0, 2),
            Err(MutationError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_remove_at() {
        let mut items = vec![1, 2, 3];
        assert_eq!(remove_at(&mut items, 0), Ok(1));
        assert_eq!(items, vec![2, 3]);
        assert!(remove_at(&mut items, 5).is_err());
    }
}
