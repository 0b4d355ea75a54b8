//! Core application state (frontend-agnostic).
//!
//! AppCore owns the configuration, the game session, the puzzle, and the
//! wheel. Every frontend event maps to exactly one named operation here;
//! widgets never mutate game state themselves.

use crate::config::Config;
use crate::data::{GameLog, InputMode, StatusLevel, UiState};
use crate::game::{letters, GameError, GameSession, Puzzle, Wedge, Wheel};
use crate::theme::AppTheme;
use anyhow::Result;
use crossterm::event::KeyCode;

/// Number of body parts on the gallows; one is drawn per wrong guess.
pub const GALLOWS_PARTS: usize = 6;

/// The solved game's outcome, kept for the game-over screen.
#[derive(Clone, Debug)]
pub struct Winner {
    pub name: String,
    pub balance: i64,
}

pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Resolved color theme
    pub theme: AppTheme,

    /// Players, balances, turn order, guess history
    pub session: GameSession,

    /// Puzzle text and reveal buffer; None until setup finishes
    pub puzzle: Option<Puzzle>,

    /// The prize wheel
    pub wheel: Wheel,

    /// Input mode and status line
    pub ui_state: UiState,

    /// Round-outcome history
    pub log: GameLog,

    /// Application running flag
    pub running: bool,

    /// Set when state changed and the screen should repaint
    pub needs_render: bool,

    /// Most recent spin outcome, shown in the wheel panel
    pub last_spin: Option<Wedge>,

    /// Wrong letter guesses so far; drives the gallows figure
    pub wrong_guesses: usize,

    /// Set once the puzzle is solved
    pub winner: Option<Winner>,
}

impl AppCore {
    pub fn new(config: Config) -> Self {
        let theme = config.theme();
        let wheel = config.wheel();
        let log = GameLog::new(config.ui.log_buffer);
        Self {
            config,
            theme,
            session: GameSession::new(),
            puzzle: None,
            wheel,
            ui_state: UiState::new(),
            log,
            running: true,
            needs_render: true,
            last_spin: None,
            wrong_guesses: 0,
            winner: None,
        }
    }

    /// Title and message for the dialog the current mode needs, if any.
    pub fn current_prompt(&self) -> Option<(&'static str, String)> {
        match self.ui_state.input_mode {
            InputMode::PlayerCount => Some((
                "Number of Players",
                "Enter number of players (must be at least 1)".to_string(),
            )),
            InputMode::PlayerName(index) => Some((
                "Player Name",
                format!("Enter name of player #{}", index + 1),
            )),
            InputMode::PuzzleEntry => Some((
                "Puzzle",
                "Ask a non-player to enter a puzzle".to_string(),
            )),
            InputMode::SolveEntry => Some((
                "Solve the Puzzle",
                "Enter the complete puzzle exactly as displayed".to_string(),
            )),
            _ => None,
        }
    }

    /// Dispatch a dialog submission to the operation the mode calls for.
    pub fn submit_dialog(&mut self, text: &str) -> Result<()> {
        self.needs_render = true;
        match self.ui_state.input_mode.clone() {
            InputMode::PlayerCount => self.submit_player_count(text),
            InputMode::PlayerName(index) => self.submit_player_name(index, text),
            InputMode::PuzzleEntry => self.submit_puzzle(text),
            InputMode::SolveEntry => self.submit_solve_attempt(text)?,
            mode => tracing::warn!(?mode, "Dialog submission outside a dialog mode"),
        }
        Ok(())
    }

    fn submit_player_count(&mut self, text: &str) {
        let parsed = text.trim().parse::<usize>().ok().filter(|n| *n >= 1);
        let Some(count) = parsed else {
            self.ui_state
                .set_status("Input must be a positive integer", StatusLevel::Error);
            return;
        };
        if let Err(err) = self.session.set_player_count(count) {
            self.ui_state.set_status(err.to_string(), StatusLevel::Error);
            return;
        }
        tracing::info!(count, "Player count set");
        self.ui_state.input_mode = InputMode::PlayerName(0);
        self.ui_state
            .set_status(format!("{} players joining", count), StatusLevel::Info);
    }

    fn submit_player_name(&mut self, index: usize, text: &str) {
        let name = text.trim();
        if name.is_empty() {
            self.ui_state
                .set_status("Player name must not be empty", StatusLevel::Error);
            return;
        }
        self.session.add_player(name);
        tracing::info!(name, index, "Player joined");
        if index + 1 < self.session.expected_players() {
            self.ui_state.input_mode = InputMode::PlayerName(index + 1);
        } else {
            self.ui_state.input_mode = InputMode::PuzzleEntry;
        }
        self.ui_state
            .set_status(format!("{} joined the game", name), StatusLevel::Info);
    }

    fn submit_puzzle(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.ui_state
                .set_status("Puzzle must not be empty", StatusLevel::Error);
            return;
        }
        self.puzzle = Some(Puzzle::with_placeholder(text, self.config.placeholder_char()));
        self.log.push("A new puzzle is up");
        self.ui_state.input_mode = InputMode::ActionSelect;
        self.announce_turn(None);
    }

    /// Full solve attempt: an exact match wins the game, anything else
    /// costs the turn.
    pub fn submit_solve_attempt(&mut self, attempt: &str) -> Result<()> {
        let Some(puzzle) = self.puzzle.as_mut() else {
            return Ok(());
        };
        let name = self.session.current_player()?.name().to_string();
        if puzzle.check_solution(attempt) {
            for letter in letters::VOWELS.iter().chain(letters::CONSONANTS.iter()) {
                puzzle.reveal(*letter);
            }
            let balance = self.session.current_player()?.balance();
            self.log.push(format!("{} solved the puzzle", name));
            tracing::info!(%name, balance, "Puzzle solved");
            self.ui_state.set_status(
                format!("{} wins ${}!", name, balance),
                StatusLevel::Success,
            );
            self.winner = Some(Winner { name, balance });
            self.ui_state.input_mode = InputMode::GameOver;
        } else {
            self.session.forfeit_turn()?;
            self.log
                .push(format!("Guess by {} was incorrect", name));
            self.ui_state.input_mode = InputMode::ActionSelect;
            self.announce_turn(Some(format!("Guess by {} was incorrect!", name)));
        }
        Ok(())
    }

    /// Route a key press for the non-dialog modes.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        self.needs_render = true;
        match self.ui_state.input_mode {
            InputMode::ActionSelect => match code {
                KeyCode::Char('s') | KeyCode::Char('S') => self.handle_spin()?,
                KeyCode::Char('b') | KeyCode::Char('B') => self.handle_buy_vowel()?,
                KeyCode::Enter => {
                    self.ui_state.input_mode = InputMode::SolveEntry;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit(),
                _ => {}
            },
            InputMode::ConsonantPick => match code {
                KeyCode::Char(ch) => self.handle_consonant(ch)?,
                KeyCode::Esc => self.quit(),
                _ => {}
            },
            InputMode::VowelPick => match code {
                KeyCode::Char(ch) => self.handle_vowel(ch)?,
                KeyCode::Esc => self.quit(),
                _ => {}
            },
            InputMode::GameOver => match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Enter | KeyCode::Esc => {
                    self.quit()
                }
                _ => {}
            },
            // Dialog modes are handled by the dialog widget.
            _ => {}
        }
        Ok(())
    }

    /// Spin the wheel and apply whatever it lands on.
    pub fn handle_spin(&mut self) -> Result<()> {
        if !self.can_spin() {
            self.ui_state
                .set_status("Every consonant has been guessed", StatusLevel::Warning);
            return Ok(());
        }
        let wedge = self.wheel.spin(&mut rand::thread_rng());
        self.apply_wedge(wedge)
    }

    /// Apply a spin outcome: cash arms a consonant round, the penalty
    /// wedges resolve immediately.
    pub fn apply_wedge(&mut self, wedge: Wedge) -> Result<()> {
        let name = self.session.current_player()?.name().to_string();
        self.last_spin = Some(wedge);
        match wedge {
            Wedge::Cash(amount) => {
                self.session.set_pending_award(amount);
                self.log.push(format!("{} spun ${}", name, amount));
                self.ui_state.input_mode = InputMode::ConsonantPick;
                self.ui_state.set_status(
                    format!("{} spun ${} - pick a consonant", name, amount),
                    StatusLevel::Info,
                );
            }
            Wedge::Bankrupt => {
                self.session.bankrupt_current_player()?;
                self.log.push(format!("{} went bankrupt", name));
                self.announce_turn(Some(format!("{} went bankrupt!", name)));
            }
            Wedge::LoseTurn => {
                self.session.forfeit_turn()?;
                self.log.push(format!("{} lost a turn", name));
                self.announce_turn(Some(format!("{} loses a turn!", name)));
            }
        }
        Ok(())
    }

    /// Deduct the vowel price and open the vowel pick. Refused while the
    /// balance is short or every vowel is gone.
    pub fn handle_buy_vowel(&mut self) -> Result<()> {
        if self.session.vowels_guessed() == letters::VOWELS.len() {
            self.ui_state
                .set_status("Every vowel has been guessed", StatusLevel::Warning);
            return Ok(());
        }
        let cost = self.config.game.vowel_cost;
        match self.session.buy_vowel(cost) {
            Ok(()) => {
                let name = self.session.current_player()?.name().to_string();
                self.log.push(format!("{} bought a vowel for ${}", name, cost));
                self.ui_state.input_mode = InputMode::VowelPick;
                self.ui_state
                    .set_status(format!("{} - pick a vowel", name), StatusLevel::Info);
            }
            Err(err @ GameError::InsufficientFunds { .. }) => {
                self.ui_state.set_status(err.to_string(), StatusLevel::Warning);
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    /// Resolve a consonant guess: a hit pays the pending award and keeps
    /// the turn, a miss passes it.
    pub fn handle_consonant(&mut self, letter: char) -> Result<()> {
        if !letters::is_consonant(letter) {
            self.ui_state
                .set_status("Pick a consonant", StatusLevel::Warning);
            return Ok(());
        }
        let letter = letters::normalize(letter);
        if self.session.is_consonant_guessed(letter) {
            self.ui_state.set_status(
                format!("{} was already guessed", letter),
                StatusLevel::Warning,
            );
            return Ok(());
        }
        let Some(puzzle) = self.puzzle.as_mut() else {
            return Ok(());
        };
        let name = self.session.current_player()?.name().to_string();
        let present = puzzle.reveal(letter);
        self.session.record_guessed_consonant(letter);
        if present {
            let award = self.session.pending_award();
            self.session.apply_correct_guess()?;
            self.log
                .push(format!("{} guessed {} for ${}", name, letter, award));
            self.ui_state.input_mode = InputMode::ActionSelect;
            self.ui_state.set_status(
                format!("{} is in the puzzle! {} keeps the turn", letter, name),
                StatusLevel::Success,
            );
        } else {
            self.miss(&name, letter)?;
        }
        Ok(())
    }

    /// Resolve a vowel guess: a hit pays nothing but keeps the turn, a
    /// miss passes it.
    pub fn handle_vowel(&mut self, letter: char) -> Result<()> {
        if !letters::is_vowel(letter) {
            self.ui_state.set_status("Pick a vowel", StatusLevel::Warning);
            return Ok(());
        }
        let letter = letters::normalize(letter);
        if self.session.is_vowel_guessed(letter) {
            self.ui_state.set_status(
                format!("{} was already guessed", letter),
                StatusLevel::Warning,
            );
            return Ok(());
        }
        let Some(puzzle) = self.puzzle.as_mut() else {
            return Ok(());
        };
        let name = self.session.current_player()?.name().to_string();
        let present = puzzle.reveal(letter);
        self.session.record_guessed_vowel(letter);
        if present {
            self.log.push(format!("{} uncovered {}", name, letter));
            self.ui_state.input_mode = InputMode::ActionSelect;
            self.ui_state.set_status(
                format!("{} is in the puzzle! {} keeps the turn", letter, name),
                StatusLevel::Success,
            );
        } else {
            self.miss(&name, letter)?;
        }
        Ok(())
    }

    fn miss(&mut self, name: &str, letter: char) -> Result<()> {
        self.session.apply_incorrect_guess()?;
        self.wrong_guesses = (self.wrong_guesses + 1).min(GALLOWS_PARTS);
        self.log
            .push(format!("{} is not in the puzzle ({})", letter, name));
        self.ui_state.input_mode = InputMode::ActionSelect;
        self.announce_turn(Some(format!("No {} in the puzzle.", letter)));
        Ok(())
    }

    /// Spins stay available while unguessed consonants remain.
    pub fn can_spin(&self) -> bool {
        self.session.consonants_guessed() < letters::CONSONANTS.len()
    }

    /// Buying stays available while the balance covers the price and
    /// unguessed vowels remain.
    pub fn can_buy_vowel(&self) -> bool {
        let balance = self
            .session
            .current_player()
            .map(|p| p.balance())
            .unwrap_or(0);
        balance >= self.config.game.vowel_cost
            && self.session.vowels_guessed() < letters::VOWELS.len()
    }

    pub fn quit(&mut self) {
        tracing::info!("Exiting");
        self.running = false;
    }

    fn announce_turn(&mut self, prefix: Option<String>) {
        let turn = match self.session.current_player() {
            Ok(player) => format!("It's {}'s turn", player.name()),
            Err(_) => String::new(),
        };
        let (text, level) = match prefix {
            Some(prefix) => (format!("{} {}", prefix, turn), StatusLevel::Warning),
            None => (turn, StatusLevel::Info),
        };
        self.ui_state.set_status(text, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InputMode;

    fn core_after_setup() -> AppCore {
        let mut core = AppCore::new(Config::default());
        core.submit_dialog("2").unwrap();
        core.submit_dialog("Ada").unwrap();
        core.submit_dialog("Bea").unwrap();
        core.submit_dialog("cat").unwrap();
        core
    }

    #[test]
    fn setup_walks_through_the_dialogs() {
        let mut core = AppCore::new(Config::default());
        assert_eq!(core.ui_state.input_mode, InputMode::PlayerCount);

        core.submit_dialog("2").unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::PlayerName(0));

        core.submit_dialog("Ada").unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::PlayerName(1));

        core.submit_dialog("Bea").unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::PuzzleEntry);

        core.submit_dialog("cat").unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::ActionSelect);
        assert_eq!(core.session.current_player().unwrap().name(), "Ada");
        assert_eq!(core.puzzle.as_ref().unwrap().display(), "- - -");
    }

    #[test]
    fn bad_player_count_reprompts() {
        let mut core = AppCore::new(Config::default());
        core.submit_dialog("zero").unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::PlayerCount);
        core.submit_dialog("0").unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::PlayerCount);
        core.submit_dialog("1").unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::PlayerName(0));
    }

    #[test]
    fn correct_consonant_pays_and_keeps_turn() {
        let mut core = core_after_setup();
        core.apply_wedge(Wedge::Cash(100)).unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::ConsonantPick);

        core.handle_key(KeyCode::Char('c')).unwrap();
        assert_eq!(core.session.players()[0].balance(), 100);
        assert_eq!(core.session.current_player().unwrap().name(), "Ada");
        assert_eq!(core.puzzle.as_ref().unwrap().display(), "C - -");
        assert_eq!(core.ui_state.input_mode, InputMode::ActionSelect);
    }

    #[test]
    fn wrong_consonant_passes_the_turn() {
        let mut core = core_after_setup();
        core.apply_wedge(Wedge::Cash(100)).unwrap();
        core.handle_key(KeyCode::Char('x')).unwrap();
        assert_eq!(core.session.current_player().unwrap().name(), "Bea");
        assert_eq!(core.puzzle.as_ref().unwrap().display(), "- - -");
        assert_eq!(core.wrong_guesses, 1);
    }

    #[test]
    fn repeated_guess_is_refused_without_side_effects() {
        let mut core = core_after_setup();
        core.apply_wedge(Wedge::Cash(100)).unwrap();
        core.handle_consonant('c').unwrap();

        core.apply_wedge(Wedge::Cash(500)).unwrap();
        core.handle_consonant('c').unwrap();
        // Still waiting for a fresh consonant; no second award.
        assert_eq!(core.ui_state.input_mode, InputMode::ConsonantPick);
        assert_eq!(core.session.players()[0].balance(), 100);
    }

    #[test]
    fn vowel_purchase_needs_funds() {
        let mut core = core_after_setup();
        core.handle_buy_vowel().unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::ActionSelect);
        assert_eq!(core.session.players()[0].balance(), 0);
        assert_eq!(core.ui_state.status_level, StatusLevel::Warning);
    }

    #[test]
    fn bought_vowel_pays_nothing_and_keeps_turn() {
        let mut core = core_after_setup();
        core.apply_wedge(Wedge::Cash(500)).unwrap();
        core.handle_consonant('c').unwrap();

        core.handle_buy_vowel().unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::VowelPick);
        assert_eq!(core.session.players()[0].balance(), 250);

        core.handle_vowel('a').unwrap();
        assert_eq!(core.session.players()[0].balance(), 250);
        assert_eq!(core.session.current_player().unwrap().name(), "Ada");
        assert_eq!(core.puzzle.as_ref().unwrap().display(), "C A -");
    }

    #[test]
    fn missed_vowel_passes_the_turn() {
        let mut core = core_after_setup();
        core.apply_wedge(Wedge::Cash(500)).unwrap();
        core.handle_consonant('c').unwrap();
        core.handle_buy_vowel().unwrap();
        core.handle_vowel('e').unwrap();
        assert_eq!(core.session.current_player().unwrap().name(), "Bea");
        assert_eq!(core.wrong_guesses, 1);
    }

    #[test]
    fn solve_attempt_wins_case_insensitively() {
        let mut core = core_after_setup();
        core.apply_wedge(Wedge::Cash(750)).unwrap();
        core.handle_consonant('c').unwrap();

        core.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::SolveEntry);
        core.submit_dialog("cat").unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::GameOver);
        let winner = core.winner.as_ref().unwrap();
        assert_eq!(winner.name, "Ada");
        assert_eq!(winner.balance, 750);
        assert!(core.puzzle.as_ref().unwrap().is_solved());
    }

    #[test]
    fn wrong_solve_attempt_costs_the_turn() {
        let mut core = core_after_setup();
        core.handle_key(KeyCode::Enter).unwrap();
        core.submit_dialog("dog").unwrap();
        assert_eq!(core.ui_state.input_mode, InputMode::ActionSelect);
        assert_eq!(core.session.current_player().unwrap().name(), "Bea");
        assert!(core.winner.is_none());
    }

    #[test]
    fn penalty_wedges_resolve_immediately() {
        let mut core = core_after_setup();
        core.apply_wedge(Wedge::Cash(500)).unwrap();
        core.handle_consonant('c').unwrap();

        core.apply_wedge(Wedge::Bankrupt).unwrap();
        assert_eq!(core.session.players()[0].balance(), 0);
        assert_eq!(core.session.current_player().unwrap().name(), "Bea");
        assert_eq!(core.ui_state.input_mode, InputMode::ActionSelect);

        core.apply_wedge(Wedge::LoseTurn).unwrap();
        assert_eq!(core.session.current_player().unwrap().name(), "Ada");
    }

    #[test]
    fn availability_rules_follow_guess_history() {
        let mut core = core_after_setup();
        assert!(core.can_spin());
        assert!(!core.can_buy_vowel());

        for letter in letters::CONSONANTS {
            core.session.record_guessed_consonant(letter);
        }
        assert!(!core.can_spin());

        core.session.set_pending_award(300);
        core.session.apply_correct_guess().unwrap();
        assert!(core.can_buy_vowel());
        for letter in letters::VOWELS {
            core.session.record_guessed_vowel(letter);
        }
        assert!(!core.can_buy_vowel());
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut core = core_after_setup();
        core.handle_key(KeyCode::Char('q')).unwrap();
        assert!(!core.running);
    }
}
