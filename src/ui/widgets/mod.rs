//! Reusable UI widgets

mod help_panel;
mod status_bar;

pub use help_panel::{help_line_count, render_help_panel};
pub use status_bar::render_diff_status_bar;
