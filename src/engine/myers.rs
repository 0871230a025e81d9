//! Minimal edit script via the `similar` crate
//!
//! Same output contract as the greedy engine; only the realignment differs.

use similar::{Algorithm, DiffOp, capture_diff_slices};

use crate::model::EditOperation;

pub(super) fn diff_lines(original: &[String], modified: &[String]) -> Vec<EditOperation> {
    let ops = capture_diff_slices(Algorithm::Myers, original, modified);
    let mut operations = Vec::with_capacity(original.len().max(modified.len()));

    for op in ops {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                for k in 0..len {
                    operations.push(EditOperation::unchanged(
                        original[old_index + k].as_str(),
                        old_index + k + 1,
                        new_index + k + 1,
                    ));
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => push_removed(&mut operations, original, old_index, old_len),
            DiffOp::Insert {
                new_index, new_len, ..
            } => push_added(&mut operations, modified, new_index, new_len),
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                push_removed(&mut operations, original, old_index, old_len);
                push_added(&mut operations, modified, new_index, new_len);
            }
        }
    }

    operations
}

fn push_removed(out: &mut Vec<EditOperation>, lines: &[String], start: usize, len: usize) {
    out.extend(
        (start..start + len).map(|idx| EditOperation::removed(lines[idx].as_str(), idx + 1)),
    );
}

fn push_added(out: &mut Vec<EditOperation>, lines: &[String], start: usize, len: usize) {
    out.extend((start..start + len).map(|idx| EditOperation::added(lines[idx].as_str(), idx + 1)));
}
