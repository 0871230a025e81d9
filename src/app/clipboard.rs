//! Clipboard utilities
//!
//! Detects available clipboard tools and copies text to the system clipboard.
//! Detection order: pbcopy (macOS) → wl-copy (Wayland) → xclip (X11) → xsel (X11 fallback)

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{DiffError, Result};

/// Clipboard commands in priority order
const CLIPBOARD_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Copy text to system clipboard using the first tool that is installed.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    for cmd_args in CLIPBOARD_COMMANDS {
        let (program, args) = (cmd_args[0], &cmd_args[1..]);
        if !is_available(program) {
            continue;
        }

        if pipe_to(program, args, text)? {
            tracing::debug!(program, bytes = text.len(), "copied to clipboard");
            return Ok(());
        }
        tracing::debug!(program, "clipboard tool failed, trying next");
    }

    Err(DiffError::Clipboard(
        "no clipboard tool found (install pbcopy, xclip, or wl-copy)".to_string(),
    ))
}

/// Feed `text` to a clipboard command's stdin and wait for it.
///
/// The child is always reaped, also when writing fails. Returns whether the
/// command exited successfully.
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<bool> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| DiffError::Clipboard(format!("failed to start {}: {}", program, e)))?;

    // Dropping stdin closes the pipe so the tool sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    if let Err(e) = written {
        let _ = child.kill();
        let _ = child.wait();
        return Err(DiffError::Clipboard(format!(
            "failed to write to {}: {}",
            program, e
        )));
    }

    let status = child
        .wait()
        .map_err(|e| DiffError::Clipboard(format!("failed to wait for {}: {}", program, e)))?;
    Ok(status.success())
}

/// Check if a command is available on the system
fn is_available(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}
