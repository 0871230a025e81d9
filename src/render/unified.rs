//! Unified projection

use std::fmt::Write;

use crate::model::DiffResult;

use super::DisplayClass;

/// One line of unified output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnifiedLine<'a> {
    /// Position in the original document (`None` for added lines)
    pub original_line_number: Option<usize>,
    /// Position in the modified document (`None` for removed lines)
    pub modified_line_number: Option<usize>,
    /// `+`, `-` or a blank
    pub marker: char,
    pub text: &'a str,
    pub class: DisplayClass,
}

/// Project a diff result as one interleaved column, in result order
pub fn unified(result: &DiffResult) -> Vec<UnifiedLine<'_>> {
    result
        .operations()
        .iter()
        .map(|op| {
            let class = DisplayClass::from(op.kind());
            UnifiedLine {
                original_line_number: op.original_line_number(),
                modified_line_number: op.modified_line_number(),
                marker: class.marker(),
                text: op.text(),
                class,
            }
        })
        .collect()
}

impl UnifiedLine<'_> {
    /// Fixed-width gutter: `"  12   13"` style old/new numbers
    pub fn gutter(&self) -> String {
        format!(
            "{} {}",
            format_line_number(self.original_line_number),
            format_line_number(self.modified_line_number)
        )
    }
}

/// Format a line number into a 4-wide column (blank when absent)
pub fn format_line_number(number: Option<usize>) -> String {
    number
        .map(|n| format!("{:4}", n))
        .unwrap_or_else(|| "    ".to_string())
}

/// Render the unified projection as plain text, one line per operation
///
/// Each line reads `{marker} {old} {new} | {text}`.
pub fn unified_text(result: &DiffResult) -> String {
    let mut out = String::new();
    for line in unified(result) {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{} {} | {}", line.marker, line.gutter(), line.text);
    }
    out
}
