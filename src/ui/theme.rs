//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

use crate::render::DisplayClass;

/// Colors for Diff View
pub mod diff_view {
    use super::*;

    /// Added line color
    pub const ADDED: Color = Color::Green;
    /// Removed line color
    pub const REMOVED: Color = Color::Red;
    /// Unchanged line color
    pub const CONTEXT: Color = Color::Reset;
    /// Added line background (side-by-side)
    pub const ADDED_BG: Color = Color::Rgb(0, 48, 0);
    /// Removed line background (side-by-side)
    pub const REMOVED_BG: Color = Color::Rgb(64, 0, 0);
    /// Line number gutter
    pub const LINE_NUMBER: Color = Color::DarkGray;
    /// File names in the column bar
    pub const FILE_NAME: Color = Color::Cyan;
    /// Rows matching the current search
    pub const SEARCH_MATCH_BG: Color = Color::Rgb(80, 80, 0);
    /// Blank filler opposite a one-sided change
    pub const FILLER: Color = Color::DarkGray;
}

/// Foreground color for a display classification
pub fn class_fg(class: DisplayClass) -> Color {
    match class {
        DisplayClass::Unchanged => diff_view::CONTEXT,
        DisplayClass::Added => diff_view::ADDED,
        DisplayClass::Removed => diff_view::REMOVED,
    }
}

/// Background color for a display classification (`None` = terminal default)
pub fn class_bg(class: DisplayClass) -> Option<Color> {
    match class {
        DisplayClass::Unchanged => None,
        DisplayClass::Added => Some(diff_view::ADDED_BG),
        DisplayClass::Removed => Some(diff_view::REMOVED_BG),
    }
}
