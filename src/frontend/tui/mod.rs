//! TUI frontend (ratatui-based).
//!
//! Wraps crossterm for terminal management and event polling, and renders
//! one panel per section of the game board.

pub mod app;
pub mod dialog;
pub mod gallows;
pub mod game_log;
pub mod letter_board;
pub mod players;
pub mod puzzle_board;
pub mod wheel_panel;

pub use app::TuiFrontend;

use ratatui::widgets::BorderType;

/// Map the configured border style name to a ratatui border type.
pub fn border_type(style: &str) -> BorderType {
    match style {
        "double" => BorderType::Double,
        "thick" => BorderType::Thick,
        "single" => BorderType::Plain,
        _ => BorderType::Rounded,
    }
}
