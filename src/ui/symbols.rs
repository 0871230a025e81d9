//! UI symbols (fillers, separators, etc.)

/// Blank side of a one-sided change in side-by-side mode
pub const FILLER: &str = "╱";

/// Separator between original and modified names
pub const ARROW: &str = " → ";

/// Truncation marker for text that does not fit
pub const ELLIPSIS: char = '…';
