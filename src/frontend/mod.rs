//! Frontend layer.
//!
//! Translates terminal events into the frontend-agnostic event enum and
//! renders the data layer. The core never imports from here.

pub mod events;
pub mod tui;

pub use events::FrontendEvent;
pub use tui::TuiFrontend;
