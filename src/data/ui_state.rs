//! UI state independent of rendering.
//!
//! The core moves the input mode and status line; frontends read them and
//! render appropriately. Nothing in here references a widget.

/// Application UI state.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Current input mode.
    pub input_mode: InputMode,

    /// Status bar text.
    pub status_text: String,

    /// Status bar severity, drives the status line color.
    pub status_level: StatusLevel,
}

/// Input mode for the application. Setup walks the first three dialog modes
/// in order; play cycles between action selection and the pick/solve modes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Dialog asking for the number of players.
    PlayerCount,
    /// Dialog asking for the name of the player with this roster index.
    PlayerName(usize),
    /// Dialog asking a non-player to enter the puzzle.
    PuzzleEntry,
    /// Current player chooses spin / buy a vowel / solve.
    ActionSelect,
    /// A cash spin happened; waiting for a consonant key.
    ConsonantPick,
    /// A vowel was bought; waiting for a vowel key.
    VowelPick,
    /// Dialog collecting a full solve attempt.
    SolveEntry,
    /// Puzzle solved; showing the winner until quit.
    GameOver,
}

impl InputMode {
    /// Modes that collect text through the modal input dialog.
    pub fn uses_dialog(&self) -> bool {
        matches!(
            self,
            InputMode::PlayerCount
                | InputMode::PlayerName(_)
                | InputMode::PuzzleEntry
                | InputMode::SolveEntry
        )
    }
}

/// Severity of the status line message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::PlayerCount,
            status_text: String::from("Welcome to hangwheel"),
            status_level: StatusLevel::Info,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status_text = text.into();
        self.status_level = level;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_modes() {
        assert!(InputMode::PlayerCount.uses_dialog());
        assert!(InputMode::PlayerName(2).uses_dialog());
        assert!(InputMode::SolveEntry.uses_dialog());
        assert!(!InputMode::ActionSelect.uses_dialog());
        assert!(!InputMode::ConsonantPick.uses_dialog());
        assert!(!InputMode::GameOver.uses_dialog());
    }
}
