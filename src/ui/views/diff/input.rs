//! Key handling for DiffView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;

use super::{DiffAction, DiffView, InputMode};

impl DiffView {
    /// Handle key input
    #[cfg(test)]
    pub fn handle_key(&mut self, key: KeyEvent) -> DiffAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_HEIGHT)
    }

    /// Handle key input with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_height: usize) -> DiffAction {
        // Always update visible_height to ensure accurate scroll bounds
        self.visible_height = visible_height;

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key, visible_height),
            InputMode::SearchInput => self.handle_search_input_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, visible_height: usize) -> DiffAction {
        match key.code {
            code if keys::is_move_down(code) => {
                self.scroll_down();
                DiffAction::None
            }
            code if keys::is_move_up(code) => {
                self.scroll_up();
                DiffAction::None
            }
            keys::HALF_PAGE_DOWN => {
                self.scroll_half_page_down(visible_height);
                DiffAction::None
            }
            keys::HALF_PAGE_UP => {
                self.scroll_half_page_up(visible_height);
                DiffAction::None
            }
            keys::GO_TOP => {
                self.jump_to_top();
                DiffAction::None
            }
            keys::GO_BOTTOM => {
                self.jump_to_bottom(visible_height);
                DiffAction::None
            }
            keys::NEXT_CHANGE => {
                if self.next_change() {
                    DiffAction::None
                } else {
                    DiffAction::ShowNotification("No changes".to_string())
                }
            }
            keys::PREV_CHANGE => {
                if self.prev_change() {
                    DiffAction::None
                } else {
                    DiffAction::ShowNotification("No changes".to_string())
                }
            }
            keys::TOGGLE_MODE => {
                self.toggle_mode();
                DiffAction::None
            }
            keys::SEARCH_INPUT => {
                self.input_mode = InputMode::SearchInput;
                self.input_buffer.clear();
                DiffAction::None
            }
            keys::SEARCH_NEXT => self.search_result(true),
            keys::SEARCH_PREV => self.search_result(false),
            keys::CYCLE_ALGORITHM => DiffAction::CycleAlgorithm,
            keys::YANK => DiffAction::CopyToClipboard,
            keys::QUIT | keys::ESC => DiffAction::Quit,
            _ => DiffAction::None,
        }
    }

    fn search_result(&mut self, forward: bool) -> DiffAction {
        if self.last_search_query.is_none() {
            return DiffAction::ShowNotification("No search pattern (press /)".to_string());
        }
        let found = if forward {
            self.search_next()
        } else {
            self.search_prev()
        };
        if found {
            DiffAction::None
        } else {
            self.not_found()
        }
    }

    fn not_found(&self) -> DiffAction {
        let query = self.last_search_query.as_deref().unwrap_or_default();
        DiffAction::ShowNotification(format!("Pattern not found: {}", query))
    }

    fn handle_search_input_key(&mut self, key: KeyEvent) -> DiffAction {
        match key.code {
            keys::ESC => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                DiffAction::None
            }
            keys::SUBMIT => {
                self.input_mode = InputMode::Normal;
                let query = std::mem::take(&mut self.input_buffer);
                let empty = query.is_empty();
                self.set_search(query);
                if empty || self.search_first() {
                    DiffAction::None
                } else {
                    self.not_found()
                }
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                DiffAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                DiffAction::None
            }
            _ => DiffAction::None,
        }
    }
}
