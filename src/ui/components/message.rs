//! Notification message components
//!
//! Provides consistent styling for notifications shown in title bars.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};
use crate::ui::symbols;

/// Build a notification line for title bar display
///
/// If `max_width` is provided and the notification is too long,
/// it will be truncated with "…" at the end.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, label_bg, text_fg) = match notification.kind {
        NotificationKind::Success => ("Success:", Color::Green, Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan, Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow, Color::Yellow),
    };

    let message = &notification.message;

    // " | " + label + " " + message + " "
    let separator_width = 3;
    let label_width = label.len() + 1;
    let full_width = separator_width + label_width + message.chars().count() + 1;

    let shown_message = match max_width {
        Some(max) if full_width > max => {
            let available = max.saturating_sub(separator_width + label_width + 2);
            if available == 0 {
                return Line::from(vec![]);
            }
            let truncated: String = message.chars().take(available).collect();
            format!("{}{} ", truncated, symbols::ELLIPSIS)
        }
        _ => format!("{} ", message),
    };

    if shown_message.trim().is_empty() {
        return Line::from(vec![]);
    }

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(Color::Black).bg(label_bg),
        ),
        Span::styled(shown_message, Style::default().fg(text_fg)),
    ])
}
