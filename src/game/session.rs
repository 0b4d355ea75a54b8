//! Game session state: players, balances, turn order, and guess history.
//!
//! The session owns the roster and the bookkeeping for the four guess
//! outcomes. It never touches rendering and never generates the award for a
//! correct guess; the wheel writes that in from outside.

use crate::game::error::{GameError, GameResult};
use crate::game::letters;
use std::collections::HashSet;

/// A single contestant. The name is fixed at creation; the balance moves
/// with guess outcomes and vowel purchases and never drops below zero.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    balance: i64,
}

impl Player {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            balance: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }
}

/// One game's worth of mutable state. Created once per game with a fixed
/// roster, mutated in place, discarded when the puzzle is solved.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    /// Insertion order is turn order.
    players: Vec<Player>,
    /// Roster size declared during setup.
    expected_players: usize,
    /// Index of the player whose turn it is.
    current: usize,
    /// What a correct consonant guess is currently worth.
    pending_award: i64,
    guessed_vowels: HashSet<char>,
    guessed_consonants: HashSet<char>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the expected roster size. Fails below the minimum of one.
    pub fn set_player_count(&mut self, count: usize) -> GameResult<()> {
        if count < 1 {
            return Err(GameError::InvalidConfiguration(count));
        }
        self.expected_players = count;
        Ok(())
    }

    pub fn expected_players(&self) -> usize {
        self.expected_players
    }

    /// Append a player with a zero balance. Setup only; turn order follows
    /// insertion order.
    pub fn add_player(&mut self, name: &str) {
        self.players.push(Player::new(name));
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> GameResult<&Player> {
        self.players.get(self.current).ok_or(GameError::EmptyRoster)
    }

    /// Overwrite the award a correct consonant guess is worth.
    pub fn set_pending_award(&mut self, amount: i64) {
        self.pending_award = amount;
    }

    pub fn pending_award(&self) -> i64 {
        self.pending_award
    }

    pub fn is_vowel_guessed(&self, letter: char) -> bool {
        self.guessed_vowels.contains(&letters::normalize(letter))
    }

    pub fn is_consonant_guessed(&self, letter: char) -> bool {
        self.guessed_consonants.contains(&letters::normalize(letter))
    }

    /// Record a vowel as attempted. Idempotent.
    pub fn record_guessed_vowel(&mut self, letter: char) {
        self.guessed_vowels.insert(letters::normalize(letter));
    }

    /// Record a consonant as attempted. Idempotent.
    pub fn record_guessed_consonant(&mut self, letter: char) {
        self.guessed_consonants.insert(letters::normalize(letter));
    }

    pub fn vowels_guessed(&self) -> usize {
        self.guessed_vowels.len()
    }

    pub fn consonants_guessed(&self) -> usize {
        self.guessed_consonants.len()
    }

    /// Correct consonant guess: pay the pending award, keep the turn.
    pub fn apply_correct_guess(&mut self) -> GameResult<()> {
        let award = self.pending_award;
        let player = self.current_player_mut()?;
        player.balance += award;
        Ok(())
    }

    /// Incorrect guess: the turn passes to the next player.
    pub fn apply_incorrect_guess(&mut self) -> GameResult<()> {
        self.advance()
    }

    /// Deduct a vowel purchase from the current balance. The purchase is
    /// only valid while the balance covers the cost.
    pub fn buy_vowel(&mut self, cost: i64) -> GameResult<()> {
        let player = self.current_player_mut()?;
        if player.balance < cost {
            return Err(GameError::InsufficientFunds {
                balance: player.balance,
                cost,
            });
        }
        player.balance -= cost;
        Ok(())
    }

    /// Lose-a-turn outcome: the turn passes without a guess being recorded.
    pub fn forfeit_turn(&mut self) -> GameResult<()> {
        self.advance()
    }

    /// Bankrupt outcome: zero the current balance, then pass the turn.
    pub fn bankrupt_current_player(&mut self) -> GameResult<()> {
        self.current_player_mut()?.balance = 0;
        self.advance()
    }

    fn current_player_mut(&mut self) -> GameResult<&mut Player> {
        self.players
            .get_mut(self.current)
            .ok_or(GameError::EmptyRoster)
    }

    fn advance(&mut self) -> GameResult<()> {
        if self.players.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        self.current = (self.current + 1) % self.players.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(names: &[&str]) -> GameSession {
        let mut session = GameSession::new();
        session.set_player_count(names.len()).unwrap();
        for name in names {
            session.add_player(name);
        }
        session
    }

    #[test]
    fn first_added_player_starts() {
        let session = session_with(&["Ada", "Bea", "Cal"]);
        assert_eq!(session.current_player().unwrap().name(), "Ada");
    }

    #[test]
    fn turn_order_is_circular() {
        let mut session = session_with(&["Ada", "Bea", "Cal"]);
        for _ in 0..session.player_count() {
            session.apply_incorrect_guess().unwrap();
        }
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn correct_guess_pays_award_and_keeps_turn() {
        let mut session = session_with(&["Ada", "Bea"]);
        session.set_pending_award(500);
        session.apply_correct_guess().unwrap();
        assert_eq!(session.current_player().unwrap().balance(), 500);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn vowel_purchase_needs_funds() {
        let mut session = session_with(&["Ada"]);
        session.set_pending_award(200);
        session.apply_correct_guess().unwrap();

        let err = session.buy_vowel(250).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                balance: 200,
                cost: 250
            }
        );
        // A failed purchase leaves the balance untouched.
        assert_eq!(session.current_player().unwrap().balance(), 200);

        session.buy_vowel(150).unwrap();
        assert_eq!(session.current_player().unwrap().balance(), 50);
    }

    #[test]
    fn guessed_letters_are_tracked_case_insensitively() {
        let mut session = session_with(&["Ada"]);
        session.record_guessed_vowel('a');
        assert!(session.is_vowel_guessed('A'));
        assert!(!session.is_vowel_guessed('E'));

        session.record_guessed_consonant('T');
        session.record_guessed_consonant('t');
        assert!(session.is_consonant_guessed('t'));
        assert_eq!(session.consonants_guessed(), 1);
        assert_eq!(session.vowels_guessed(), 1);
    }

    #[test]
    fn bankrupt_zeroes_balance_and_advances() {
        let mut session = session_with(&["Ada", "Bea"]);
        session.set_pending_award(750);
        session.apply_correct_guess().unwrap();
        session.bankrupt_current_player().unwrap();
        assert_eq!(session.players()[0].balance(), 0);
        assert_eq!(session.current_player().unwrap().name(), "Bea");
    }

    #[test]
    fn forfeit_advances_without_recording_a_guess() {
        let mut session = session_with(&["Ada", "Bea"]);
        session.forfeit_turn().unwrap();
        assert_eq!(session.current_player().unwrap().name(), "Bea");
        assert_eq!(session.vowels_guessed(), 0);
        assert_eq!(session.consonants_guessed(), 0);
    }

    #[test]
    fn zero_player_count_is_rejected() {
        let mut session = GameSession::new();
        assert_eq!(
            session.set_player_count(0),
            Err(GameError::InvalidConfiguration(0))
        );
    }

    #[test]
    fn empty_roster_queries_fail() {
        let mut session = GameSession::new();
        assert_eq!(session.current_player().unwrap_err(), GameError::EmptyRoster);
        assert_eq!(
            session.apply_incorrect_guess().unwrap_err(),
            GameError::EmptyRoster
        );
        assert_eq!(session.buy_vowel(1).unwrap_err(), GameError::EmptyRoster);
    }
}
