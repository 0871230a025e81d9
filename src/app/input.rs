//! Input handling for the application

use crossterm::event::KeyEvent;

use super::clipboard::copy_to_clipboard;
use super::state::App;
use crate::keys;
use crate::render::unified_text;
use crate::ui::views::{DiffAction, InputMode};
use crate::ui::widgets::help_line_count;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Handle Ctrl+C globally
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // If in search input, delegate all keys to DiffView (skip global handling)
        if self.diff_view.input_mode != InputMode::Normal {
            self.dispatch_diff_key(key);
            return;
        }

        if self.show_help {
            self.handle_help_key(key);
            return;
        }

        if key.code == keys::HELP {
            self.show_help = true;
            self.help_scroll = 0;
            return;
        }

        self.dispatch_diff_key(key);
    }

    fn dispatch_diff_key(&mut self, key: KeyEvent) {
        let height = self.last_frame_height.get() as usize;
        let action = self.diff_view.handle_key_with_height(key, height);
        self.handle_diff_action(action);
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        let max_scroll = help_line_count().saturating_sub(1) as u16;
        match key.code {
            keys::HELP | keys::ESC | keys::QUIT => self.show_help = false,
            code if keys::is_move_down(code) => {
                self.help_scroll = (self.help_scroll + 1).min(max_scroll);
            }
            code if keys::is_move_up(code) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            keys::GO_TOP => self.help_scroll = 0,
            keys::GO_BOTTOM => self.help_scroll = max_scroll,
            _ => {}
        }
    }

    fn handle_diff_action(&mut self, action: DiffAction) {
        match action {
            DiffAction::None => {}
            DiffAction::Quit => self.quit(),
            DiffAction::CycleAlgorithm => {
                let next = self.diff_view.algorithm.next();
                self.recompute(next);
                let stats = self.diff_view.result.stats();
                self.notify_info(format!("Algorithm: {} ({})", next, stats));
            }
            DiffAction::CopyToClipboard => self.copy_unified_diff(),
            DiffAction::ShowNotification(message) => self.notify_warning(message),
        }
    }

    fn copy_unified_diff(&mut self) {
        let text = unified_text(&self.diff_view.result);
        let line_count = self.diff_view.result.len();
        match copy_to_clipboard(&text) {
            Ok(()) => {
                self.notify_success(format!("Copied to clipboard ({} lines)", line_count));
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.notify_warning(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::engine::Algorithm;
    use crate::model::{Document, NotificationKind};
    use crate::render::ViewMode;

    fn app(original: &str, modified: &str) -> App {
        App::new(
            "old.txt",
            Document::from_text(original),
            "new.txt",
            Document::from_text(modified),
            Algorithm::Greedy,
            ViewMode::SideBySide,
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_quit_key() {
        let mut app = app("a", "b");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits_during_search_input() {
        let mut app = app("a", "b");
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.diff_view.input_mode, InputMode::SearchInput);

        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_q_is_typed_in_search_input() {
        let mut app = app("a", "b");
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.diff_view.input_buffer, "q");
    }

    #[test]
    fn test_help_toggle_and_scroll() {
        let mut app = app("a", "b");
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.help_scroll, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.help_scroll, 1);

        // q closes help instead of quitting
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_help_scroll_is_clamped() {
        let mut app = app("a", "b");
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('G'));
        let bottom = app.help_scroll;
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.help_scroll, bottom);
        assert_eq!(bottom as usize, help_line_count() - 1);
    }

    #[test]
    fn test_cycle_algorithm_recomputes() {
        let mut app = app("a\nb\nc", "a\nX\nb\nc");
        assert_eq!(app.diff_view.result.additions(), 3);
        assert_eq!(app.diff_view.result.deletions(), 2);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.diff_view.algorithm, Algorithm::Myers);
        assert_eq!(app.diff_view.result.additions(), 1);
        assert_eq!(app.diff_view.result.deletions(), 0);

        let notification = app.notification.as_ref().expect("notification");
        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(notification.message, "Algorithm: myers (+1 -0)");

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.diff_view.algorithm, Algorithm::Greedy);
        assert_eq!(app.diff_view.result.additions(), 3);
    }

    #[test]
    fn test_no_changes_shows_warning() {
        let mut app = app("same", "same");
        press(&mut app, KeyCode::Char(']'));
        let notification = app.notification.as_ref().expect("notification");
        assert_eq!(notification.kind, NotificationKind::Warning);
        assert_eq!(notification.message, "No changes");
    }

    #[test]
    fn test_toggle_mode_through_app() {
        let mut app = app("a", "b");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.diff_view.mode, ViewMode::Unified);
    }
}
