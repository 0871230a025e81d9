//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};
use crate::ui::views::{DiffView, InputMode};

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Build the diff view status line: change position, scroll position, key hints
pub fn build_diff_status_line(diff_view: &DiffView) -> Line<'static> {
    let hints = match diff_view.input_mode {
        InputMode::Normal => keys::DIFF_VIEW_HINTS,
        InputMode::SearchInput => keys::SEARCH_INPUT_HINTS,
    };

    let position = if diff_view.total_rows() == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", diff_view.scroll_offset + 1, diff_view.total_rows())
    };

    let prefix = vec![
        Span::styled(
            format!(" {} ", diff_view.current_context()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw(" "),
        Span::styled(format!(" {} ", position), Style::default().fg(Color::Cyan)),
    ];

    build_status_bar_with_prefix(prefix, hints)
}

/// Render the status bar for diff view
pub fn render_diff_status_bar(frame: &mut Frame, diff_view: &DiffView) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = build_diff_status_line(diff_view);
    frame.render_widget(Paragraph::new(status), status_area);
}
