//! Snapshot tests for the whole application screen

use crossterm::event::{KeyCode, KeyEvent};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use linediff::app::App;
use linediff::engine::Algorithm;
use linediff::model::Document;
use linediff::render::ViewMode;

fn app() -> App {
    App::new(
        "old.txt",
        Document::from_text("a\nb\nc"),
        "new.txt",
        Document::from_text("a\nX\nb\nc"),
        Algorithm::Greedy,
        ViewMode::SideBySide,
    )
}

fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

#[test]
fn test_app_screen_with_status_bar() {
    let mut app = app();
    let terminal = draw(&mut app, 120, 8);

    assert_snapshot!(terminal.backend(), @r#"
    "┌────────────────────────────────────────────────────── linediff ──────────────────────────────────────────────────────┐"
    "│old.txt → new.txt  +3 -2  [side-by-side] [greedy]                                                                     │"
    "│ old.txt                                                    new.txt                                                   │"
    "│   1  a                                                       1  a                                                    │"
    "│   2 -b                                                       2 +X                                                    │"
    "│   3 -c                                                       3 +b                                                    │"
    "│     ╱                                                        4 +c                                                    │"
    " 1 change(s)   1/4   [?] Help   []/[] Change   [Tab] Mode   [a] Algo   [/] Search   [y] Copy   [q] Quit                 "
    "#);
}

#[test]
fn test_render_records_content_height() {
    let mut app = app();
    let _ = draw(&mut app, 120, 20);

    // 20 rows - status bar - header (2) - column bar (1)
    let before = app.diff_view.scroll_offset;
    app.on_key_event(KeyEvent::from(KeyCode::Char('G')));
    // Content (4 rows) fits in 16 rows, so there is nothing to scroll
    assert_eq!(app.diff_view.scroll_offset, before);
}

#[test]
fn test_help_overlay() {
    let mut app = app();
    app.on_key_event(KeyEvent::from(KeyCode::Char('?')));
    let terminal = draw(&mut app, 100, 40);

    assert_snapshot!(terminal.backend(), @r#"
    "┌──────────────────────────────────────────── linediff ────────────────────────────────────────────┐"
    "│old.txt → new.txt  +3 -2  [side-by-side] [greedy]                                                 │"
    "│ old.txt                                          new.txt                                         │"
    "│   1  a                                             1  a                                          │"
    "│   2 -b            ┌──────────────────── linediff - Help ─────────────────────┐                   │"
    "│   3 -c            │Key bindings:                                             │                   │"
    "│     ╱             │                                                          │                   │"
    "│                   │Global:                                                   │                   │"
    "│                   │  q         Quit                                          │                   │"
    "│                   │  Esc       Quit / close help                             │                   │"
    "│                   │  Ctrl+C    Quit immediately                              │                   │"
    "│                   │  ?         Toggle this help                              │                   │"
    "│                   │                                                          │                   │"
    "│                   │Navigation:                                               │                   │"
    "│                   │  j/↓       Scroll down                                   │                   │"
    "│                   │  k/↑       Scroll up                                     │                   │"
    "│                   │  d/u       Half page down/up                             │                   │"
    "│                   │  g/G       Go to top/bottom                              │                   │"
    "│                   │                                                          │                   │"
    "│                   │Diff View:                                                │                   │"
    "│                   │  ]/[       Next/prev change                              │                   │"
    "│                   │  Tab       Toggle side-by-side/unified                   │                   │"
    "│                   │  a         Switch algorithm (greedy/myers)               │                   │"
    "│                   │  y         Copy unified diff                             │                   │"
    "│                   │  /         Search lines (regex)                          │                   │"
    "│                   │  n/N       Next/prev match                               │                   │"
    "│                   │                                                          │                   │"
    "│                   │Search Input:                                             │                   │"
    "│                   │  Enter     Submit search                                 │                   │"
    "│                   │  Esc       Cancel search                                 │                   │"
    "│                   │  Backspace Delete character                              │                   │"
    "│                   │                                                          │                   │"
    "│                   │                                                          │                   │"
    "│                   │                                                          │                   │"
    "│                   │                                                          │                   │"
    "│                   └──────────────────────────────────────────────────────────┘                   │"
    "│                                                                                                  │"
    "│                                                                                                  │"
    "│                                                                                                  │"
    " 1 change(s)   1/4   [?] Help   []/[] Change   [Tab] Mode   [a] Algo   [/] Search   [y] Copy   [q] Q"
    "#);
}

#[test]
fn test_algorithm_switch_updates_header() {
    let mut app = app();
    app.on_key_event(KeyEvent::from(KeyCode::Char('a')));
    let terminal = draw(&mut app, 120, 8);

    assert_snapshot!(terminal.backend(), @r#"
    "┌────────────────────────────────────────────────────── linediff ──────────────────── | Info: Algorithm: myers (+1 -0) ┐"
    "│old.txt → new.txt  +1 -0  [side-by-side] [myers]                                                                      │"
    "│ old.txt                                                    new.txt                                                   │"
    "│   1  a                                                       1  a                                                    │"
    "│     ╱                                                        2 +X                                                    │"
    "│   2  b                                                       3  b                                                    │"
    "│   3  c                                                       4  c                                                    │"
    " 1 change(s)   1/4   [?] Help   []/[] Change   [Tab] Mode   [a] Algo   [/] Search   [y] Copy   [q] Quit                 "
    "#);
}
