//! Diff data model
//!
//! Line-level edit operations and the result of one diff computation.

use serde::{Deserialize, Serialize};

use crate::stats::ChangeStats;

/// Classification of an edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Line present in both documents
    Unchanged,
    /// Line only in the modified document
    Added,
    /// Line only in the original document
    Removed,
}

/// A single line-level difference between two documents
///
/// Line numbers are 1-based positions within their respective document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EditOperation {
    /// Line kept from the original document
    Unchanged {
        original_line: String,
        original_line_number: usize,
        modified_line_number: usize,
    },
    /// Line inserted in the modified document
    Added {
        line: String,
        modified_line_number: usize,
    },
    /// Line dropped from the original document
    Removed {
        line: String,
        original_line_number: usize,
    },
}

impl EditOperation {
    /// Create an unchanged operation
    pub fn unchanged(
        line: impl Into<String>,
        original_line_number: usize,
        modified_line_number: usize,
    ) -> Self {
        Self::Unchanged {
            original_line: line.into(),
            original_line_number,
            modified_line_number,
        }
    }

    /// Create an added operation
    pub fn added(line: impl Into<String>, modified_line_number: usize) -> Self {
        Self::Added {
            line: line.into(),
            modified_line_number,
        }
    }

    /// Create a removed operation
    pub fn removed(line: impl Into<String>, original_line_number: usize) -> Self {
        Self::Removed {
            line: line.into(),
            original_line_number,
        }
    }

    /// Kind of this operation
    pub fn kind(&self) -> EditKind {
        match self {
            Self::Unchanged { .. } => EditKind::Unchanged,
            Self::Added { .. } => EditKind::Added,
            Self::Removed { .. } => EditKind::Removed,
        }
    }

    /// Line content
    pub fn text(&self) -> &str {
        match self {
            Self::Unchanged { original_line, .. } => original_line,
            Self::Added { line, .. } | Self::Removed { line, .. } => line,
        }
    }

    /// Position in the original document, if the line exists there
    pub fn original_line_number(&self) -> Option<usize> {
        match self {
            Self::Unchanged {
                original_line_number,
                ..
            }
            | Self::Removed {
                original_line_number,
                ..
            } => Some(*original_line_number),
            Self::Added { .. } => None,
        }
    }

    /// Position in the modified document, if the line exists there
    pub fn modified_line_number(&self) -> Option<usize> {
        match self {
            Self::Unchanged {
                modified_line_number,
                ..
            }
            | Self::Added {
                modified_line_number,
                ..
            } => Some(*modified_line_number),
            Self::Removed { .. } => None,
        }
    }

    /// Check if this operation is not `Unchanged`
    pub fn is_change(&self) -> bool {
        self.kind() != EditKind::Unchanged
    }
}

/// The complete, ordered edit script for one document pair
///
/// Built once per diff call and never mutated afterwards. Deserializing
/// reads only the operations; the counts are always derived from them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SerializedDiffResult")]
pub struct DiffResult {
    operations: Vec<EditOperation>,
    additions: usize,
    deletions: usize,
}

/// Wire form accepted when deserializing a [`DiffResult`]
#[derive(Deserialize)]
struct SerializedDiffResult {
    operations: Vec<EditOperation>,
}

impl From<SerializedDiffResult> for DiffResult {
    fn from(raw: SerializedDiffResult) -> Self {
        Self::new(raw.operations)
    }
}

impl DiffResult {
    /// Wrap an operation sequence, deriving the summary counts
    pub fn new(operations: Vec<EditOperation>) -> Self {
        let stats = ChangeStats::from_operations(&operations);
        Self {
            operations,
            additions: stats.additions,
            deletions: stats.deletions,
        }
    }

    /// All operations in emission order
    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if there are no operations at all
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Count of `Added` operations
    pub fn additions(&self) -> usize {
        self.additions
    }

    /// Count of `Removed` operations
    pub fn deletions(&self) -> usize {
        self.deletions
    }

    /// Check if any line differs
    pub fn has_changes(&self) -> bool {
        self.additions + self.deletions > 0
    }

    /// Summary counts
    pub fn stats(&self) -> ChangeStats {
        ChangeStats {
            additions: self.additions,
            deletions: self.deletions,
        }
    }

    /// Lines of the original document, reconstructed from the edit script
    pub fn original_lines(&self) -> impl Iterator<Item = &str> {
        self.operations
            .iter()
            .filter(|op| op.original_line_number().is_some())
            .map(EditOperation::text)
    }

    /// Lines of the modified document, reconstructed from the edit script
    pub fn modified_lines(&self) -> impl Iterator<Item = &str> {
        self.operations
            .iter()
            .filter(|op| op.modified_line_number().is_some())
            .map(EditOperation::text)
    }

    /// Indices where a run of changed operations begins
    pub fn change_positions(&self) -> Vec<usize> {
        self.operations
            .iter()
            .enumerate()
            .filter(|(i, op)| {
                op.is_change() && (*i == 0 || !self.operations[*i - 1].is_change())
            })
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiffResult {
        DiffResult::new(vec![
            EditOperation::unchanged("a", 1, 1),
            EditOperation::removed("b", 2),
            EditOperation::added("B", 2),
            EditOperation::unchanged("c", 3, 3),
            EditOperation::added("d", 4),
        ])
    }

    #[test]
    fn test_diff_result_default() {
        let result = DiffResult::default();
        assert!(result.is_empty());
        assert!(!result.has_changes());
        assert_eq!(result.additions(), 0);
        assert_eq!(result.deletions(), 0);
    }

    #[test]
    fn test_diff_result_counts() {
        let result = sample();
        assert_eq!(result.len(), 5);
        assert_eq!(result.additions(), 2);
        assert_eq!(result.deletions(), 1);
        assert!(result.has_changes());
    }

    #[test]
    fn test_reconstruction_iterators() {
        let result = sample();
        assert_eq!(result.original_lines().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(
            result.modified_lines().collect::<Vec<_>>(),
            ["a", "B", "c", "d"]
        );
    }

    #[test]
    fn test_change_positions() {
        assert_eq!(sample().change_positions(), vec![1, 4]);
        assert!(DiffResult::default().change_positions().is_empty());
    }

    #[test]
    fn test_operation_accessors() {
        let op = EditOperation::unchanged("x", 3, 5);
        assert_eq!(op.kind(), EditKind::Unchanged);
        assert_eq!(op.text(), "x");
        assert_eq!(op.original_line_number(), Some(3));
        assert_eq!(op.modified_line_number(), Some(5));
        assert!(!op.is_change());

        let op = EditOperation::added("y", 7);
        assert_eq!(op.kind(), EditKind::Added);
        assert_eq!(op.original_line_number(), None);
        assert_eq!(op.modified_line_number(), Some(7));

        let op = EditOperation::removed("z", 2);
        assert_eq!(op.kind(), EditKind::Removed);
        assert_eq!(op.original_line_number(), Some(2));
        assert_eq!(op.modified_line_number(), None);
        assert!(op.is_change());
    }

    #[test]
    fn test_operation_json_shape() {
        let json = serde_json::to_string(&EditOperation::added("x", 1)).unwrap();
        assert_eq!(json, r#"{"kind":"added","line":"x","modified_line_number":1}"#);

        let back: EditOperation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EditOperation::added("x", 1));
    }

    #[test]
    fn test_result_json_recomputes_counts() {
        let json = r#"{
            "operations": [
                {"kind":"removed","line":"a","original_line_number":1},
                {"kind":"added","line":"b","modified_line_number":1}
            ],
            "additions": 7,
            "deletions": 0
        }"#;
        let result: DiffResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.additions(), 1);
        assert_eq!(result.deletions(), 1);
    }

    #[test]
    fn test_result_json_round_trip() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: DiffResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
