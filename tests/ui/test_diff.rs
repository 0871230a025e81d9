//! Snapshot tests for the Diff View in both modes
//!
//! Uses insta + ratatui TestBackend for visual regression testing.

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use linediff::engine::diff;
use linediff::model::Notification;
use linediff::render::ViewMode;
use linediff::ui::views::{DiffView, InputMode};

/// One inserted line, which the greedy engine spreads over the tail
fn insertion_view() -> DiffView {
    DiffView::new(
        "old.txt".to_string(),
        "new.txt".to_string(),
        diff("a\nb\nc", "a\nX\nb\nc"),
    )
}

fn draw(view: &DiffView, notification: Option<&Notification>) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(60, 9)).unwrap();
    terminal
        .draw(|frame| {
            view.render(frame, frame.area(), notification);
        })
        .unwrap();
    terminal
}

#[test]
fn test_side_by_side_screen() {
    let terminal = draw(&insertion_view(), None);

    assert_snapshot!(terminal.backend(), @r#"
    "┌──────────────────────── linediff ────────────────────────┐"
    "│old.txt → new.txt  +3 -2  [side-by-side] [greedy]         │"
    "│ old.txt                      new.txt                     │"
    "│   1  a                         1  a                      │"
    "│   2 -b                         2 +X                      │"
    "│   3 -c                         3 +b                      │"
    "│     ╱                          4 +c                      │"
    "│                                                          │"
    "│                                                          │"
    "#);
}

#[test]
fn test_unified_screen() {
    let view = insertion_view().with_mode(ViewMode::Unified);
    let terminal = draw(&view, None);

    assert_snapshot!(terminal.backend(), @r#"
    "┌──────────────────────── linediff ────────────────────────┐"
    "│old.txt → new.txt  +3 -2  [unified] [greedy]              │"
    "│ old  new   old.txt → new.txt                             │"
    "│   1    1   a                                             │"
    "│   2      - b                                             │"
    "│        2 + X                                             │"
    "│   3      - c                                             │"
    "│        3 + b                                             │"
    "│        4 + c                                             │"
    "#);
}

#[test]
fn test_empty_documents() {
    let view = DiffView::new("a".to_string(), "b".to_string(), diff("", ""));
    let terminal = draw(&view, None);

    assert_snapshot!(terminal.backend(), @r#"
    "┌──────────────────────── linediff ────────────────────────┐"
    "│a → b  +0 -0  [side-by-side] [greedy]                     │"
    "│ a                            b                           │"
    "│                                                          │"
    "│                 Both documents are empty.                │"
    "│                                                          │"
    "│                                                          │"
    "│                                                          │"
    "│                                                          │"
    "#);
}

#[test]
fn test_notification_in_title_bar() {
    let notification = Notification::success("Copied");
    let terminal = draw(&insertion_view(), Some(&notification));

    assert_snapshot!(terminal.backend(), @r#"
    "┌──────────────────────── linediff ───── | Success: Copied ┐"
    "│old.txt → new.txt  +3 -2  [side-by-side] [greedy]         │"
    "│ old.txt                      new.txt                     │"
    "│   1  a                         1  a                      │"
    "│   2 -b                         2 +X                      │"
    "│   3 -c                         3 +b                      │"
    "│     ╱                          4 +c                      │"
    "│                                                          │"
    "│                                                          │"
    "#);
}

#[test]
fn test_search_input_bar() {
    let mut view = insertion_view();
    view.input_mode = InputMode::SearchInput;
    view.input_buffer = "foo".to_string();
    let terminal = draw(&view, None);

    assert_snapshot!(terminal.backend(), @r#"
    "┌──────────────────────── linediff ────────────────────────┐"
    "│old.txt → new.txt  +3 -2  [side-by-side] [greedy]         │"
    "│ old.txt                      new.txt                     │"
    "│   1  a                         1  a                      │"
    "│   2 -b                         2 +X                      │"
    "│   3 -c                         3 +b                      │"
    "┌ / Search ────────────────────────────────────────────────┐"
    "│foo                                                       │"
    "└──────────────────────────────────────────────────────────┘"
    "#);
}

#[test]
fn test_scrolled_view_starts_at_offset() {
    let original: Vec<String> = (1..=40).map(|i| format!("line {i}")).collect();
    let text = original.join("\n");
    let mut view = DiffView::new("a".to_string(), "b".to_string(), diff(&text, &text));
    view.scroll_offset = 10;

    let mut terminal = Terminal::new(TestBackend::new(60, 7)).unwrap();
    terminal
        .draw(|frame| {
            view.render(frame, frame.area(), None);
        })
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#"
    "┌──────────────────────── linediff ────────────────────────┐"
    "│a → b  +0 -0  [side-by-side] [greedy]                     │"
    "│ a                            b                           │"
    "│  11  line 11                  11  line 11                │"
    "│  12  line 12                  12  line 12                │"
    "│  13  line 13                  13  line 13                │"
    "│  14  line 14                  14  line 14                │"
    "#);
}
