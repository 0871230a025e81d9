//! Single-line text input bar

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};

use super::bordered_block;
use crate::ui::symbols;

/// Render a bordered input bar with the cursor after the typed text
///
/// Long input is shown from its tail with a leading `…`.
pub fn render_input_bar(frame: &mut Frame, area: Rect, title: &'static str, buffer: &str) {
    let available_width = area.width.saturating_sub(2) as usize;
    let char_count = buffer.chars().count();
    let display_text = visible_tail(buffer, available_width);

    let input_bar = Paragraph::new(display_text).block(bordered_block(Line::from(title)));
    frame.render_widget(input_bar, area);

    let cursor_pos = char_count.min(available_width.saturating_sub(1));
    frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
}

/// The part of `text` that fits in `width` columns, keeping the end
fn visible_tail(text: &str, width: usize) -> String {
    let char_count = text.chars().count();
    if char_count < width || width == 0 {
        return text.to_string();
    }
    let skip = char_count + 2 - width;
    format!(
        "{}{}",
        symbols::ELLIPSIS,
        text.chars().skip(skip).collect::<String>()
    )
}
