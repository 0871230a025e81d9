//! linediff - line-by-line document comparison
//!
//! Computes an ordered edit script between two texts and presents it side by
//! side, unified, or as change statistics.
//!
//! This library provides:
//! - [`engine`]: The line diff algorithms (greedy, Myers)
//! - [`model`]: Documents, edit operations and diff results
//! - [`render`]: Side-by-side and unified projections
//! - [`stats`]: Addition/deletion counts
//! - [`input`]: Loading and normalizing input text
//! - [`output`]: Plain, stat and JSON output
//! - [`config`]: Command-line options
//! - [`logging`]: Structured logging setup
//! - [`app`]: Terminal viewer state and logic
//! - [`keys`]: Key binding definitions
//! - [`ui`]: User interface components
//!
//! ```
//! use linediff::{EditOperation, diff};
//!
//! let result = diff("a\nb", "a\nc");
//! assert_eq!(result.additions(), 1);
//! assert_eq!(result.operations()[0], EditOperation::unchanged("a", 1, 1));
//! ```

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod keys;
pub mod logging;
pub mod model;
pub mod output;
pub mod render;
pub mod stats;
pub mod ui;

pub use engine::{Algorithm, diff, diff_with};
pub use error::DiffError;
pub use model::{DiffResult, Document, EditKind, EditOperation};
pub use stats::ChangeStats;
