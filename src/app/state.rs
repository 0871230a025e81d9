//! Application state

use std::cell::Cell;

use crate::engine::{self, Algorithm};
use crate::model::{Document, Notification};
use crate::render::ViewMode;
use crate::ui::views::DiffView;

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Help overlay scroll offset
    pub help_scroll: u16,
    /// Original document (kept for recomputation)
    original: Document,
    /// Modified document (kept for recomputation)
    modified: Document,
    /// Diff view state
    pub diff_view: DiffView,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Last known diff content height (updated during render)
    pub(crate) last_frame_height: Cell<u16>,
}

impl App {
    /// Construct a new instance of [`App`] and compute the initial diff.
    pub fn new(
        original_name: impl Into<String>,
        original: Document,
        modified_name: impl Into<String>,
        modified: Document,
        algorithm: Algorithm,
        mode: ViewMode,
    ) -> Self {
        let result = engine::diff_documents_with(&original, &modified, algorithm);
        let mut diff_view =
            DiffView::new(original_name.into(), modified_name.into(), result).with_mode(mode);
        diff_view.algorithm = algorithm;

        Self {
            running: true,
            show_help: false,
            help_scroll: 0,
            original,
            modified,
            diff_view,
            notification: None,
            last_frame_height: Cell::new(24), // Default terminal height
        }
    }

    /// Recompute the diff with another algorithm
    pub(crate) fn recompute(&mut self, algorithm: Algorithm) {
        let result = engine::diff_documents_with(&self.original, &self.modified, algorithm);
        tracing::info!(
            algorithm = %algorithm,
            additions = result.additions(),
            deletions = result.deletions(),
            "diff recomputed"
        );
        self.diff_view.set_result(result, algorithm);
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    pub(crate) fn notify_success(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::success(message));
    }

    pub(crate) fn notify_info(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::info(message));
    }

    pub(crate) fn notify_warning(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::warning(message));
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
