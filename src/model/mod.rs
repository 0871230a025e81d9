//! Data models for linediff
//!
//! UI-independent data structures: documents, edit operations, diff
//! results and viewer notifications.

mod diff;
mod document;
mod notification;

pub use diff::{DiffResult, EditKind, EditOperation};
pub use document::Document;
pub use notification::{Notification, NotificationKind};
