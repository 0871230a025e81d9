//! Document model
//!
//! One side of a comparison: an immutable, ordered list of text lines.

use serde::{Deserialize, Serialize};

/// An ordered sequence of text lines
///
/// A trailing line terminator does not produce an extra empty line:
/// `""` has no lines, `"a\n"` and `"a"` both have the single line `"a"`,
/// and `"\n"` has one empty line.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split a full-text buffer into lines
    ///
    /// `\r\n` terminators are accepted; lone `\r` is kept as line content.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Build a document from already-split lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at a 0-based index
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Join the lines back into a buffer (no trailing terminator)
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
