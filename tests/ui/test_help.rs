//! Snapshot tests for the Help panel overlay

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use linediff::ui::widgets::render_help_panel;

fn draw_help(width: u16, height: u16, scroll: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), scroll);
        })
        .unwrap();
    terminal
}

#[test]
fn test_help_panel_full() {
    let terminal = draw_help(100, 40, 0);
    assert_snapshot!(terminal.backend(), @r#"
    "                                                                                                    "
    "                                                                                                    "
    "                                                                                                    "
    "                                                                                                    "
    "                    ┌──────────────────── linediff - Help ─────────────────────┐                    "
    "                    │Key bindings:                                             │                    "
    "                    │                                                          │                    "
    "                    │Global:                                                   │                    "
    "                    │  q         Quit                                          │                    "
    "                    │  Esc       Quit / close help                             │                    "
    "                    │  Ctrl+C    Quit immediately                              │                    "
    "                    │  ?         Toggle this help                              │                    "
    "                    │                                                          │                    "
    "                    │Navigation:                                               │                    "
    "                    │  j/↓       Scroll down                                   │                    "
    "                    │  k/↑       Scroll up                                     │                    "
    "                    │  d/u       Half page down/up                             │                    "
    "                    │  g/G       Go to top/bottom                              │                    "
    "                    │                                                          │                    "
    "                    │Diff View:                                                │                    "
    "                    │  ]/[       Next/prev change                              │                    "
    "                    │  Tab       Toggle side-by-side/unified                   │                    "
    "                    │  a         Switch algorithm (greedy/myers)               │                    "
    "                    │  y         Copy unified diff                             │                    "
    "                    │  /         Search lines (regex)                          │                    "
    "                    │  n/N       Next/prev match                               │                    "
    "                    │                                                          │                    "
    "                    │Search Input:                                             │                    "
    "                    │  Enter     Submit search                                 │                    "
    "                    │  Esc       Cancel search                                 │                    "
    "                    │  Backspace Delete character                              │                    "
    "                    │                                                          │                    "
    "                    │                                                          │                    "
    "                    │                                                          │                    "
    "                    │                                                          │                    "
    "                    └──────────────────────────────────────────────────────────┘                    "
    "                                                                                                    "
    "                                                                                                    "
    "                                                                                                    "
    "                                                                                                    "
    "#);
}

#[test]
fn test_help_panel_scrolled() {
    let terminal = draw_help(100, 20, 2);
    assert_snapshot!(terminal.backend(), @r#"
    "                                                                                                    "
    "                                                                                                    "
    "                    ┌──────────────────── linediff - Help ─────────────────────┐                    "
    "                    │Global:                                                   │                    "
    "                    │  q         Quit                                          │                    "
    "                    │  Esc       Quit / close help                             │                    "
    "                    │  Ctrl+C    Quit immediately                              │                    "
    "                    │  ?         Toggle this help                              │                    "
    "                    │                                                          │                    "
    "                    │Navigation:                                               │                    "
    "                    │  j/↓       Scroll down                                   │                    "
    "                    │  k/↑       Scroll up                                     │                    "
    "                    │  d/u       Half page down/up                             │                    "
    "                    │  g/G       Go to top/bottom                              │                    "
    "                    │                                                          │                    "
    "                    │Diff View:                                                │                    "
    "                    │  ]/[       Next/prev change                              │                    "
    "                    └──────────────────────────────────────────────────────────┘                    "
    "                                                                                                    "
    "                                                                                                    "
    "#);
}
