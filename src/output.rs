//! Non-interactive output formats (plain, stat, json)

use std::io::Write;

use crossterm::style::Stylize;

use crate::error::{DiffError, Result};
use crate::model::DiffResult;
use crate::render::{DisplayClass, unified};
use crate::ui::symbols;

/// Width of the `--output stat` histogram bar
const HISTOGRAM_WIDTH: usize = 40;

/// Write the unified projection, optionally colored
pub fn write_plain<W: Write>(out: &mut W, result: &DiffResult, color: bool) -> Result<()> {
    for line in unified(result) {
        let text = format!("{} {} | {}", line.marker, line.gutter(), line.text);
        let written = match (color, line.class) {
            (true, DisplayClass::Added) => writeln!(out, "{}", text.green()),
            (true, DisplayClass::Removed) => writeln!(out, "{}", text.red()),
            _ => writeln!(out, "{}", text),
        };
        written.map_err(stdout_error)?;
    }
    Ok(())
}

/// Write the change summary with a histogram bar
pub fn write_stat<W: Write>(
    out: &mut W,
    result: &DiffResult,
    original_name: &str,
    modified_name: &str,
) -> Result<()> {
    let stats = result.stats();
    writeln!(
        out,
        " {}{}{} | {} {}",
        original_name,
        symbols::ARROW,
        modified_name,
        stats.total(),
        stats.histogram(HISTOGRAM_WIDTH)
    )
    .and_then(|()| writeln!(out, " {}", stats.summary()))
    .map_err(stdout_error)
}

/// Write the diff result as pretty-printed JSON
pub fn write_json<W: Write>(out: &mut W, result: &DiffResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out).map_err(stdout_error)
}

fn stdout_error(source: std::io::Error) -> DiffError {
    DiffError::Io {
        path: "<stdout>".into(),
        source,
    }
}
