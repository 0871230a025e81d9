//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::App;
use crate::ui::views::DiffView;
use crate::ui::widgets::{render_diff_status_bar, render_help_panel};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(1),
        };

        // Used by key handling for accurate scroll bounds
        let content_height = main_area.height.saturating_sub(DiffView::CHROME_HEIGHT);
        self.last_frame_height.set(content_height);

        let notification = self.notification.as_ref().filter(|n| !n.is_expired());
        self.diff_view.render(frame, main_area, notification);
        render_diff_status_bar(frame, &self.diff_view);

        // Help overlay on top of everything
        if self.show_help {
            render_help_panel(frame, area, self.help_scroll);
        }
    }
}
