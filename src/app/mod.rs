//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and diff recomputation
//! - `input`: Key event handling
//! - `render`: UI rendering
//! - `clipboard`: Copying the unified diff out of the terminal

mod clipboard;
mod input;
mod render;
mod state;

pub use state::App;
