//! Greedy line synchronization
//!
//! Walks both documents with one cursor each. Equal lines advance both
//! cursors; a mismatch is always emitted as one removal followed by one
//! addition. There is no look-ahead, so an inserted line makes every later
//! line show up as changed until the two sides happen to line up again.

use crate::model::EditOperation;

/// Produce the edit script for two line slices
pub(super) fn diff_lines(original: &[String], modified: &[String]) -> Vec<EditOperation> {
    let mut operations = Vec::with_capacity(original.len().max(modified.len()));
    let (mut i, mut j) = (0, 0);

    while i < original.len() || j < modified.len() {
        if i >= original.len() {
            operations.push(EditOperation::added(modified[j].as_str(), j + 1));
            j += 1;
        } else if j >= modified.len() {
            operations.push(EditOperation::removed(original[i].as_str(), i + 1));
            i += 1;
        } else if original[i] == modified[j] {
            operations.push(EditOperation::unchanged(original[i].as_str(), i + 1, j + 1));
            i += 1;
            j += 1;
        } else {
            operations.push(EditOperation::removed(original[i].as_str(), i + 1));
            i += 1;
            operations.push(EditOperation::added(modified[j].as_str(), j + 1));
            j += 1;
        }
    }

    operations
}
