//! Input loading
//!
//! Reads the two sides of a comparison and rejects anything that is not
//! text before it reaches the engine. Line endings are normalized here so
//! the engine only ever sees `\n`.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{DiffError, Result};

/// Path argument meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// Where one side of a comparison comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    /// Interpret a command-line path (`-` means stdin)
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == STDIN_PATH {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Name shown in headers and logs
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }

    /// Load the source as normalized text
    pub fn load(&self) -> Result<String> {
        match self {
            Self::File(path) => load_text(path),
            Self::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|source| DiffError::Io {
                        path: PathBuf::from(STDIN_PATH),
                        source,
                    })?;
                decode(bytes, "<stdin>")
            }
        }
    }
}

/// Read a file as UTF-8 text with normalized line endings
pub fn load_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| DiffError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.display().to_string();
    decode(bytes, &name)
}

fn decode(bytes: Vec<u8>, name: &str) -> Result<String> {
    let len = bytes.len();
    let text = String::from_utf8(bytes).map_err(|e| {
        DiffError::InvalidArgument(format!(
            "{} is not valid UTF-8 text (invalid byte at offset {})",
            name,
            e.utf8_error().valid_up_to()
        ))
    })?;

    let text = if text.contains('\r') {
        normalize_line_endings(&text).into_owned()
    } else {
        text
    };

    tracing::info!(source = name, bytes = len, lines = text.lines().count(), "input loaded");
    Ok(text)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
