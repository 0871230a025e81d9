//! Rendering for DiffView

use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::Notification;
use crate::render::{Cell, UnifiedLine, ViewMode, side_by_side, unified};
use crate::ui::{components, symbols, theme};

use super::{DiffView, InputMode};

/// Width of a tab stop when displaying line content
const TAB_WIDTH: usize = 4;

impl DiffView {
    /// Render the diff view (without status bar - rendered by App)
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let (view_area, input_area) = match self.input_mode {
            InputMode::Normal => (area, None),
            InputMode::SearchInput => {
                let chunks =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
                (chunks[0], Some(chunks[1]))
            }
        };

        let chunks = Layout::vertical([
            Constraint::Length(2), // Header (names, stats, mode)
            Constraint::Length(1), // Column bar
            Constraint::Min(1),    // Diff content
        ])
        .split(view_area);

        self.render_header(frame, chunks[0], notification);
        self.render_column_bar(frame, chunks[1]);
        self.render_diff_content(frame, chunks[2]);

        if let Some(input_area) = input_area {
            components::render_input_bar(frame, input_area, " / Search ", &self.input_buffer);
        }
    }

    /// Render the header (file names, statistics, mode and algorithm)
    fn render_header(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" linediff ").bold().centered();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let stats = self.result.stats();
        let summary = Line::from(vec![
            Span::styled(
                self.original_name.clone(),
                Style::default().fg(theme::diff_view::REMOVED),
            ),
            Span::raw(symbols::ARROW),
            Span::styled(
                self.modified_name.clone(),
                Style::default().fg(theme::diff_view::ADDED),
            ),
            Span::raw("  "),
            Span::styled(
                format!("+{}", stats.additions),
                Style::default().fg(theme::diff_view::ADDED).bold(),
            ),
            Span::raw(" "),
            Span::styled(
                format!("-{}", stats.deletions),
                Style::default().fg(theme::diff_view::REMOVED).bold(),
            ),
            Span::styled(
                format!("  [{}] [{}]", self.mode.label(), self.algorithm.label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let block = if let Some(notif) = notif_line {
            components::header_block(title).title(notif.right_aligned())
        } else {
            components::header_block(title)
        };

        frame.render_widget(Paragraph::new(summary).block(block), area);
    }

    /// Render the column bar (file name per column, or the gutter legend)
    fn render_column_bar(&self, frame: &mut Frame, area: Rect) {
        let block = components::side_borders_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let name_style = Style::default().fg(theme::diff_view::FILE_NAME).bold();
        match self.mode {
            ViewMode::SideBySide => {
                let [left, right] = halves(inner);
                frame.render_widget(
                    Paragraph::new(Span::styled(format!(" {}", self.original_name), name_style)),
                    left,
                );
                frame.render_widget(
                    Paragraph::new(Span::styled(format!(" {}", self.modified_name), name_style)),
                    right,
                );
            }
            ViewMode::Unified => {
                let legend = Line::from(vec![
                    Span::styled(
                        " old  new",
                        Style::default().fg(theme::diff_view::LINE_NUMBER),
                    ),
                    Span::raw("   "),
                    Span::styled(self.original_name.clone(), name_style),
                    Span::raw(symbols::ARROW),
                    Span::styled(self.modified_name.clone(), name_style),
                ]);
                frame.render_widget(Paragraph::new(legend), inner);
            }
        }
    }

    /// Render the diff content (scrollable)
    fn render_diff_content(&self, frame: &mut Frame, area: Rect) {
        let block = components::side_borders_block();

        if self.result.is_empty() {
            let empty = components::empty_state("Both documents are empty.", None).block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        let height = inner.height as usize;

        match self.mode {
            ViewMode::SideBySide => self.render_side_by_side(frame, inner, height),
            ViewMode::Unified => self.render_unified(frame, inner, height),
        }
    }

    fn render_side_by_side(&self, frame: &mut Frame, area: Rect, height: usize) {
        let rows = side_by_side(&self.result).rows();
        let (mut left, mut right) = (Vec::new(), Vec::new());

        for (idx, row) in rows.iter().enumerate().skip(self.scroll_offset).take(height) {
            let matched = self.search_matches.binary_search(&idx).is_ok();
            left.push(cell_line(row.left.as_ref(), matched));
            right.push(cell_line(row.right.as_ref(), matched));
        }

        let [left_area, right_area] = halves(area);
        frame.render_widget(Paragraph::new(left), left_area);
        frame.render_widget(Paragraph::new(right), right_area);
    }

    fn render_unified(&self, frame: &mut Frame, area: Rect, height: usize) {
        let lines: Vec<Line> = unified(&self.result)
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(height)
            .map(|(idx, line)| {
                unified_line(line, self.search_matches.binary_search(&idx).is_ok())
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Split an area into equal left/right columns
fn halves(area: Rect) -> [Rect; 2] {
    let chunks =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    [chunks[0], chunks[1]]
}

/// Build one side-by-side cell; `None` renders as a blank filler
fn cell_line(cell: Option<&Cell<'_>>, matched: bool) -> Line<'static> {
    let Some(cell) = cell else {
        return Line::from(Span::styled(
            format!("{:>6}", symbols::FILLER),
            Style::default().fg(theme::diff_view::FILLER),
        ));
    };

    let mut text_style = Style::default().fg(theme::class_fg(cell.class));
    if let Some(bg) = theme::class_bg(cell.class) {
        text_style = text_style.bg(bg);
    }
    if matched {
        text_style = text_style.bg(theme::diff_view::SEARCH_MATCH_BG);
    }

    Line::from(vec![
        Span::styled(
            format!("{:>4} ", cell.line_number),
            Style::default().fg(theme::diff_view::LINE_NUMBER),
        ),
        Span::styled(
            cell.class.marker().to_string(),
            Style::default().fg(theme::class_fg(cell.class)),
        ),
        Span::styled(expand_tabs(cell.text), text_style),
    ])
}

/// Build one unified line: gutter, marker, content
fn unified_line(line: &UnifiedLine<'_>, matched: bool) -> Line<'static> {
    let fg = theme::class_fg(line.class);
    let mut text_style = Style::default().fg(fg);
    if matched {
        text_style = text_style.bg(theme::diff_view::SEARCH_MATCH_BG);
    }

    Line::from(vec![
        Span::styled(
            line.gutter(),
            Style::default().fg(theme::diff_view::LINE_NUMBER),
        ),
        Span::styled(format!(" {} ", line.marker), Style::default().fg(fg)),
        Span::styled(expand_tabs(line.text), text_style),
    ])
}

/// Replace tabs with spaces so columns stay aligned
fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}
