//! Keybinding definitions for linediff
//!
//! All keybindings are defined here so views and help text stay in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (quit from anywhere, including input mode)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit / close overlay
pub const ESC: KeyCode = KeyCode::Esc;

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Half page down
pub const HALF_PAGE_DOWN: KeyCode = KeyCode::Char('d');

/// Half page up
pub const HALF_PAGE_UP: KeyCode = KeyCode::Char('u');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Diff View keys
// =============================================================================

/// Next change block
pub const NEXT_CHANGE: KeyCode = KeyCode::Char(']');

/// Previous change block
pub const PREV_CHANGE: KeyCode = KeyCode::Char('[');

/// Toggle side-by-side / unified
pub const TOGGLE_MODE: KeyCode = KeyCode::Tab;

/// Switch diff algorithm (greedy / myers)
pub const CYCLE_ALGORITHM: KeyCode = KeyCode::Char('a');

/// Copy unified diff text to clipboard
pub const YANK: KeyCode = KeyCode::Char('y');

/// Open text search input (for n/N navigation)
pub const SEARCH_INPUT: KeyCode = KeyCode::Char('/');

/// Next search result
pub const SEARCH_NEXT: KeyCode = KeyCode::Char('n');

/// Previous search result
pub const SEARCH_PREV: KeyCode = KeyCode::Char('N');

// =============================================================================
// Input keys (used in search input mode)
// =============================================================================

/// Submit input
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Quit / close help",
    },
    KeyBindEntry {
        key: "Ctrl+C",
        description: "Quit immediately",
    },
    KeyBindEntry {
        key: "?",
        description: "Toggle this help",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/↓",
        description: "Scroll down",
    },
    KeyBindEntry {
        key: "k/↑",
        description: "Scroll up",
    },
    KeyBindEntry {
        key: "d/u",
        description: "Half page down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

/// Diff view key bindings for help display
pub const DIFF_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "]/[",
        description: "Next/prev change",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Toggle side-by-side/unified",
    },
    KeyBindEntry {
        key: "a",
        description: "Switch algorithm (greedy/myers)",
    },
    KeyBindEntry {
        key: "y",
        description: "Copy unified diff",
    },
    KeyBindEntry {
        key: "/",
        description: "Search lines (regex)",
    },
    KeyBindEntry {
        key: "n/N",
        description: "Next/prev match",
    },
];

/// Search input key bindings
pub const INPUT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Submit search",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Cancel search",
    },
    KeyBindEntry {
        key: "Backspace",
        description: "Delete character",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Diff view status bar hints
pub const DIFF_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "?",
        label: "Help",
        color: Color::Cyan,
    },
    KeyHint {
        key: "]/[",
        label: "Change",
        color: Color::Magenta,
    },
    KeyHint {
        key: "Tab",
        label: "Mode",
        color: Color::Yellow,
    },
    KeyHint {
        key: "a",
        label: "Algo",
        color: Color::Yellow,
    },
    KeyHint {
        key: "/",
        label: "Search",
        color: Color::Cyan,
    },
    KeyHint {
        key: "y",
        label: "Copy",
        color: Color::Green,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

/// Search input status bar hints
pub const SEARCH_INPUT_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Enter",
        label: "Search",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Cancel",
        color: Color::Red,
    },
];
