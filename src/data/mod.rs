//! Shared data structures read by frontends and written by the core.

pub mod log;
pub mod ui_state;

pub use log::{GameLog, LogEntry};
pub use ui_state::{InputMode, StatusLevel, UiState};
