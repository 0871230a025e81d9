//! Help panel widget
//!
//! `build_help_lines()` feeds both rendering and the scroll bound in App.

use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::keys;

/// Help panel size as a percentage of the terminal
const PANEL_WIDTH_PERCENT: u16 = 60;
const PANEL_HEIGHT_PERCENT: u16 = 80;

/// A single line in the help panel
pub struct HelpLine {
    /// The styled line for display
    pub line: Line<'static>,
    /// Whether this line is a key binding entry (vs section title / blank)
    pub is_entry: bool,
}

/// Build all help panel lines
pub fn build_help_lines() -> Vec<HelpLine> {
    let mut lines = vec![
        HelpLine {
            line: Line::from("Key bindings:".bold()),
            is_entry: false,
        },
        HelpLine {
            line: Line::from(""),
            is_entry: false,
        },
    ];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Diff View", keys::DIFF_KEYS);
    push_section(&mut lines, "Search Input", keys::INPUT_KEYS);

    lines
}

fn push_section(lines: &mut Vec<HelpLine>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(HelpLine {
        line: Line::from(format!("{title}:")).underlined(),
        is_entry: false,
    });

    for entry in entries {
        lines.push(HelpLine {
            line: Line::from(vec![
                Span::styled(
                    format!("  {:10}", entry.key),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(entry.description),
            ]),
            is_entry: true,
        });
    }

    lines.push(HelpLine {
        line: Line::from(""),
        is_entry: false,
    });
}

/// Total number of help lines (for scroll clamping)
pub fn help_line_count() -> usize {
    build_help_lines().len()
}

/// Centered overlay rectangle inside `area`
fn overlay_area(area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(PANEL_HEIGHT_PERCENT)])
        .flex(Flex::Center)
        .areas(area);
    let [overlay] = Layout::horizontal([Constraint::Percentage(PANEL_WIDTH_PERCENT)])
        .flex(Flex::Center)
        .areas(vertical);
    overlay
}

/// Render help as an overlay on top of the current view.
///
/// `scroll` is the vertical scroll offset (0 = top).
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" linediff - Help ").bold().white().centered();
    let panel = overlay_area(area);

    let display_lines: Vec<Line<'static>> =
        build_help_lines().into_iter().map(|hl| hl.line).collect();

    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(display_lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        panel,
    );
}
