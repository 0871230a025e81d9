//! Diff rendering adapter
//!
//! Projects a [`DiffResult`](crate::model::DiffResult) into display rows,
//! independent of any UI toolkit:
//!
//! - [`side_by_side`]: two independently numbered columns
//! - [`unified`]: one interleaved column with `+`/`-` markers
//!
//! The TUI and the plain-text output both consume these projections.

mod side_by_side;
mod unified;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiffError;
use crate::model::EditKind;

pub use side_by_side::{Cell, Row, SideBySide, side_by_side};
pub use unified::{UnifiedLine, unified, unified_text};

/// Display classification of a rendered line (drives highlight color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayClass {
    Unchanged,
    Added,
    Removed,
}

impl DisplayClass {
    /// Leading marker character in unified output
    pub fn marker(&self) -> char {
        match self {
            Self::Unchanged => ' ',
            Self::Added => '+',
            Self::Removed => '-',
        }
    }
}

impl From<EditKind> for DisplayClass {
    fn from(kind: EditKind) -> Self {
        match kind {
            EditKind::Unchanged => Self::Unchanged,
            EditKind::Added => Self::Added,
            EditKind::Removed => Self::Removed,
        }
    }
}

/// Presentation mode for the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Two aligned columns
    #[default]
    SideBySide,
    /// One interleaved column
    Unified,
}

impl ViewMode {
    /// Cycle to next mode
    pub fn next(self) -> Self {
        match self {
            Self::SideBySide => Self::Unified,
            Self::Unified => Self::SideBySide,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::SideBySide => "side-by-side",
            Self::Unified => "unified",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "side-by-side" | "split" => Ok(Self::SideBySide),
            "unified" => Ok(Self::Unified),
            other => Err(DiffError::InvalidArgument(format!(
                "unknown view mode '{}' (expected side-by-side or unified)",
                other
            ))),
        }
    }
}
