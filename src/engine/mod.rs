//! Line diff engine
//!
//! Turns two documents into an ordered sequence of line-level edit
//! operations. Every algorithm here produces a [`DiffResult`] satisfying the
//! same contract:
//!
//! - the text of `Unchanged` + `Removed` operations, in order, is the
//!   original document; `Unchanged` + `Added` is the modified document
//! - original line numbers over `Unchanged` + `Removed` run `1..=len` without
//!   gaps, and likewise for modified line numbers over `Unchanged` + `Added`
//!
//! The engine is total: any pair of strings yields a result, and the
//! functions hold no state, so they can be called from any thread.

mod greedy;
mod myers;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::error::DiffError;
use crate::model::{DiffResult, Document};

/// Line matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Algorithm {
    /// Single-pass cursor synchronization, no look-ahead
    #[default]
    Greedy,
    /// Minimal edit script (Myers O(ND))
    Myers,
}

impl Algorithm {
    /// Cycle to next algorithm
    pub fn next(self) -> Self {
        match self {
            Self::Greedy => Self::Myers,
            Self::Myers => Self::Greedy,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Myers => "myers",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "myers" => Ok(Self::Myers),
            other => Err(DiffError::InvalidArgument(format!(
                "unknown diff algorithm '{}' (expected greedy or myers)",
                other
            ))),
        }
    }
}

/// Diff two text buffers with the greedy algorithm
pub fn diff(original: &str, modified: &str) -> DiffResult {
    diff_with(original, modified, Algorithm::Greedy)
}

/// Diff two text buffers with the given algorithm
pub fn diff_with(original: &str, modified: &str, algorithm: Algorithm) -> DiffResult {
    let original = Document::from_text(original);
    let modified = Document::from_text(modified);
    diff_documents_with(&original, &modified, algorithm)
}

/// Diff two already-split documents with the greedy algorithm
pub fn diff_documents(original: &Document, modified: &Document) -> DiffResult {
    diff_documents_with(original, modified, Algorithm::Greedy)
}

/// Diff two already-split documents with the given algorithm
pub fn diff_documents_with(
    original: &Document,
    modified: &Document,
    algorithm: Algorithm,
) -> DiffResult {
    let started = Instant::now();
    let operations = match algorithm {
        Algorithm::Greedy => greedy::diff_lines(original.lines(), modified.lines()),
        Algorithm::Myers => myers::diff_lines(original.lines(), modified.lines()),
    };
    let result = DiffResult::new(operations);

    tracing::debug!(
        algorithm = algorithm.label(),
        original_lines = original.len(),
        modified_lines = modified.len(),
        additions = result.additions(),
        deletions = result.deletions(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "diff computed"
    );

    result
}
