//! View components
//!
//! linediff has a single screen: the diff view.

mod diff;

pub use diff::{DiffAction, DiffView, InputMode};
