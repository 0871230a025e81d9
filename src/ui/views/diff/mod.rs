//! Diff View
//!
//! Displays one [`DiffResult`] either side by side or unified, with
//! change-to-change navigation and line search.

mod input;
mod render;

use regex::{Regex, RegexBuilder};

use crate::engine::Algorithm;
use crate::model::DiffResult;
use crate::render::{DisplayClass, Row, ViewMode, side_by_side};

/// Action returned by DiffView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffAction {
    /// No action needed
    None,
    /// Leave the application
    Quit,
    /// Recompute the diff with the next algorithm
    CycleAlgorithm,
    /// Copy the unified diff text to the clipboard
    CopyToClipboard,
    /// Show a short message in the title bar
    ShowNotification(String),
}

/// Input mode of the diff view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a search pattern
    SearchInput,
}

/// Diff view state
#[derive(Debug)]
pub struct DiffView {
    /// Display name of the original document
    pub original_name: String,
    /// Display name of the modified document
    pub modified_name: String,
    /// Diff being displayed
    pub result: DiffResult,
    /// Algorithm that produced `result`
    pub algorithm: Algorithm,
    /// Side-by-side or unified
    pub mode: ViewMode,
    /// Scroll offset (display row index)
    pub scroll_offset: usize,
    /// Current input mode
    pub input_mode: InputMode,
    /// Search pattern being typed
    pub input_buffer: String,
    /// Last submitted search pattern
    pub last_search_query: Option<String>,
    /// Rows where a run of changes starts (for the current mode)
    change_rows: Vec<usize>,
    /// Rows matching the last search (for the current mode)
    search_matches: Vec<usize>,
    /// Number of display rows in the current mode
    row_count: usize,
    /// Last known visible height (updated by key handling)
    visible_height: usize,
    /// Index into `change_rows` of the change last jumped to
    current_change: Option<usize>,
    /// Index into `search_matches` of the match last jumped to
    current_match: Option<usize>,
}

impl Default for DiffView {
    fn default() -> Self {
        Self::new(String::new(), String::new(), DiffResult::default())
    }
}

impl DiffView {
    /// Default visible height for scroll calculations when not specified
    const DEFAULT_VISIBLE_HEIGHT: usize = 20;

    /// Rows taken by the header and column title bar
    pub const CHROME_HEIGHT: u16 = 3;

    /// Create a view over a diff result (greedy algorithm, side-by-side)
    pub fn new(original_name: String, modified_name: String, result: DiffResult) -> Self {
        let mut view = Self {
            original_name,
            modified_name,
            result: DiffResult::default(),
            algorithm: Algorithm::default(),
            mode: ViewMode::default(),
            scroll_offset: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            last_search_query: None,
            change_rows: Vec::new(),
            search_matches: Vec::new(),
            row_count: 0,
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
            current_change: None,
            current_match: None,
        };
        view.set_result(result, Algorithm::default());
        view
    }

    /// Builder-style display mode override
    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Replace the displayed diff, keeping the scroll position where possible
    pub fn set_result(&mut self, result: DiffResult, algorithm: Algorithm) {
        self.result = result;
        self.algorithm = algorithm;
        self.rebuild_rows();
    }

    /// Switch display mode
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.mode == mode {
            return;
        }
        // Keep roughly the same place in the document
        let anchor = self.scroll_offset;
        self.mode = mode;
        self.rebuild_rows();
        self.scroll_offset = anchor.min(self.max_scroll_offset());
        tracing::debug!(mode = %mode, rows = self.row_count, "view mode switched");
    }

    /// Toggle between side-by-side and unified
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    /// Recompute row-derived state for the current mode
    fn rebuild_rows(&mut self) {
        match self.mode {
            // One row per operation
            ViewMode::Unified => {
                self.row_count = self.result.len();
                self.change_rows = self.result.change_positions();
            }
            ViewMode::SideBySide => {
                let flags: Vec<bool> = side_by_side(&self.result)
                    .rows()
                    .iter()
                    .map(is_changed_row)
                    .collect();
                self.row_count = flags.len();
                self.change_rows = flags
                    .iter()
                    .enumerate()
                    .filter(|&(i, &changed)| changed && (i == 0 || !flags[i - 1]))
                    .map(|(i, _)| i)
                    .collect();
            }
        }
        self.clear_cursors();
        self.search_matches = match self.compiled_search() {
            Some(re) => self.matching_rows(&re),
            None => Vec::new(),
        };
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Texts shown on each display row
    fn row_texts(&self) -> Vec<Vec<&str>> {
        match self.mode {
            ViewMode::Unified => self
                .result
                .operations()
                .iter()
                .map(|op| vec![op.text()])
                .collect(),
            ViewMode::SideBySide => side_by_side(&self.result)
                .rows()
                .iter()
                .map(|row| row.left.iter().chain(row.right.iter()).map(|c| c.text).collect())
                .collect(),
        }
    }

    /// Number of display rows in the current mode
    pub fn total_rows(&self) -> usize {
        self.row_count
    }

    /// Check if the documents differ at all
    pub fn has_changes(&self) -> bool {
        self.result.has_changes()
    }

    /// Rows where change blocks start
    pub fn change_rows(&self) -> &[usize] {
        &self.change_rows
    }

    /// Rows matching the last search
    pub fn search_matches(&self) -> &[usize] {
        &self.search_matches
    }

    /// 1-based index of the current change block
    ///
    /// After a jump this is the change jumped to, even when the view could
    /// not scroll it to the top row. Otherwise it is the last change at or
    /// above the top row.
    pub fn current_change_index(&self) -> Option<usize> {
        self.current_change
            .or_else(|| {
                self.change_rows
                    .iter()
                    .rposition(|&row| row <= self.scroll_offset)
            })
            .map(|i| i + 1)
    }

    /// Context string for the status bar
    pub fn current_context(&self) -> String {
        if self.change_rows.is_empty() {
            return "no changes".to_string();
        }
        match self.current_change_index() {
            Some(i) => format!("change {}/{}", i, self.change_rows.len()),
            None => format!("{} change(s)", self.change_rows.len()),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Scroll up by one row
    pub fn scroll_up(&mut self) {
        self.clear_cursors();
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one row
    pub fn scroll_down(&mut self) {
        self.clear_cursors();
        if self.scroll_offset < self.max_scroll_offset() {
            self.scroll_offset += 1;
        }
    }

    /// Calculate maximum scroll offset based on visible height
    fn max_scroll_offset(&self) -> usize {
        if self.visible_height == 0 {
            return 0;
        }
        self.row_count.saturating_sub(self.visible_height)
    }

    /// Scroll up by half page
    pub fn scroll_half_page_up(&mut self, visible_height: usize) {
        self.clear_cursors();
        self.visible_height = visible_height;
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height / 2);
    }

    /// Scroll down by half page
    pub fn scroll_half_page_down(&mut self, visible_height: usize) {
        self.clear_cursors();
        self.visible_height = visible_height;
        let target = self.scroll_offset + visible_height / 2;
        self.scroll_offset = target.min(self.max_scroll_offset());
    }

    /// Jump to the top
    pub fn jump_to_top(&mut self) {
        self.clear_cursors();
        self.scroll_offset = 0;
    }

    /// Jump to the bottom
    pub fn jump_to_bottom(&mut self, visible_height: usize) {
        self.clear_cursors();
        self.visible_height = visible_height;
        self.scroll_offset = self.max_scroll_offset();
    }

    /// Put a row at the top of the view (clamped to the scroll range)
    fn scroll_to_row(&mut self, row: usize) {
        self.scroll_offset = row.min(self.max_scroll_offset());
    }

    /// Forget which change or match was jumped to (manual scrolling)
    fn clear_cursors(&mut self) {
        self.current_change = None;
        self.current_match = None;
    }

    /// Jump to the next change block, wrapping around
    pub fn next_change(&mut self) -> bool {
        self.step_change(true)
    }

    /// Jump to the previous change block, wrapping around
    pub fn prev_change(&mut self) -> bool {
        self.step_change(false)
    }

    fn step_change(&mut self, forward: bool) -> bool {
        let Some(idx) = step_cursor(
            &self.change_rows,
            self.current_change,
            self.scroll_offset,
            forward,
        ) else {
            return false;
        };
        self.scroll_to_row(self.change_rows[idx]);
        self.current_change = Some(idx);
        self.current_match = None;
        true
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Compile the last query: regex, case-insensitive, literal on bad syntax
    fn compiled_search(&self) -> Option<Regex> {
        let query = self.last_search_query.as_deref()?;
        RegexBuilder::new(query)
            .case_insensitive(true)
            .build()
            .or_else(|_| {
                RegexBuilder::new(&regex::escape(query))
                    .case_insensitive(true)
                    .build()
            })
            .ok()
    }

    fn matching_rows(&self, re: &Regex) -> Vec<usize> {
        self.row_texts()
            .iter()
            .enumerate()
            .filter(|(_, texts)| texts.iter().any(|t| re.is_match(t)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Set (or clear, with an empty query) the search pattern
    pub fn set_search(&mut self, query: String) {
        if query.is_empty() {
            self.last_search_query = None;
            self.current_match = None;
            self.search_matches.clear();
            return;
        }
        self.last_search_query = Some(query);
        self.current_match = None;
        self.search_matches = match self.compiled_search() {
            Some(re) => self.matching_rows(&re),
            None => Vec::new(),
        };
    }

    /// Jump to the first match from the top
    pub fn search_first(&mut self) -> bool {
        if self.search_matches.is_empty() {
            return false;
        }
        self.jump_to_match(0);
        true
    }

    /// Jump to the next match, wrapping around (n key)
    pub fn search_next(&mut self) -> bool {
        self.step_match(true)
    }

    /// Jump to the previous match, wrapping around (N key)
    pub fn search_prev(&mut self) -> bool {
        self.step_match(false)
    }

    fn step_match(&mut self, forward: bool) -> bool {
        match step_cursor(
            &self.search_matches,
            self.current_match,
            self.scroll_offset,
            forward,
        ) {
            Some(idx) => {
                self.jump_to_match(idx);
                true
            }
            None => false,
        }
    }

    fn jump_to_match(&mut self, idx: usize) {
        self.scroll_to_row(self.search_matches[idx]);
        self.current_match = Some(idx);
        self.current_change = None;
    }
}

/// Step a cursor over sorted target rows, wrapping at both ends
///
/// Without a cursor the step starts from the top row: forward picks the
/// first target at or below it, backward the last target above it.
fn step_cursor(
    rows: &[usize],
    cursor: Option<usize>,
    top: usize,
    forward: bool,
) -> Option<usize> {
    let last = rows.len().checked_sub(1)?;
    let idx = match (cursor, forward) {
        (Some(i), true) if i < last => i + 1,
        (Some(_), true) => 0,
        (Some(i), false) if i > 0 && i <= last => i - 1,
        (Some(_), false) => last,
        (None, true) => rows.iter().position(|&row| row >= top).unwrap_or(0),
        (None, false) => rows.iter().rposition(|&row| row < top).unwrap_or(last),
    };
    Some(idx)
}

/// A side-by-side row is a change if either cell is
fn is_changed_row(row: &Row<'_>) -> bool {
    row.left.is_some_and(|c| c.class != DisplayClass::Unchanged)
        || row.right.is_some_and(|c| c.class != DisplayClass::Unchanged)
}
