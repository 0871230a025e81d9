//! Change statistics
//!
//! Addition/deletion counts for a diff, plus the `--stat` style summary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{DiffResult, EditKind, EditOperation};

/// Counts of added and removed lines
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStats {
    /// Number of `Added` operations
    pub additions: usize,
    /// Number of `Removed` operations
    pub deletions: usize,
}

impl ChangeStats {
    /// Count the operations of a diff result
    pub fn from_result(result: &DiffResult) -> Self {
        Self::from_operations(result.operations())
    }

    /// Count a raw operation slice
    pub fn from_operations(operations: &[EditOperation]) -> Self {
        operations
            .iter()
            .fold(Self::default(), |mut stats, op| {
                match op.kind() {
                    EditKind::Added => stats.additions += 1,
                    EditKind::Removed => stats.deletions += 1,
                    EditKind::Unchanged => {}
                }
                stats
            })
    }

    /// Total changed lines
    pub fn total(&self) -> usize {
        self.additions + self.deletions
    }

    /// Check if nothing changed
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "{} line(s) changed: {} addition(s), {} deletion(s)",
            self.total(),
            self.additions,
            self.deletions
        )
    }

    /// A `+++--` bar at most `width` characters wide
    ///
    /// Each non-zero side keeps at least one character when there is room.
    pub fn histogram(&self, width: usize) -> String {
        let total = self.total();
        if total == 0 || width == 0 {
            return String::new();
        }

        let (plus, minus) = if total <= width {
            (self.additions, self.deletions)
        } else {
            let mut plus = (self.additions * width + total / 2) / total;
            if self.additions > 0 && plus == 0 {
                plus = 1;
            }
            if self.deletions > 0 && plus == width && width > 1 {
                plus = width - 1;
            }
            (plus, width - plus)
        };

        format!("{}{}", "+".repeat(plus), "-".repeat(minus))
    }
}

impl fmt::Display for ChangeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} -{}", self.additions, self.deletions)
    }
}
